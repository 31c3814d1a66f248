//! Namespace rewriting of map keys
//!
//! Used for `autoload.psr-4` style maps, where the namespace lives in the key
//! and the value is a path that must not change.

use serde_json::{Map, Value};

use super::namespace;
use super::rule::RewriteRule;
use crate::config::KeyOrder;

/// Replace `token` in every key of `map` with the real namespace
///
/// Values are kept as they are. With [`KeyOrder::MoveToEnd`] rewritten keys
/// are appended after the untouched ones, in their original relative order;
/// with [`KeyOrder::InPlace`] they keep their slot. If a rewritten key
/// collides with an existing one, the rewritten entry wins.
///
/// Anything other than an object is left alone. Returns the number of
/// rewritten keys.
pub fn rewrite_keys(
    map: &mut Value,
    token: &str,
    vendor: &str,
    studly: &str,
    order: KeyOrder,
) -> usize {
    let Some(entries) = map.as_object_mut() else {
        return 0;
    };

    let rule = RewriteRule::new(token, namespace(vendor, studly));
    if !entries.keys().any(|key| rule.matches(key)) {
        return 0;
    }

    let mut kept = Map::new();
    let mut moved = Vec::new();
    let mut rewritten = 0;

    for (key, value) in std::mem::take(entries) {
        if rule.matches(&key) {
            let new_key = rule.apply(&key);
            tracing::debug!("namespace key {key:?} -> {new_key:?}");
            rewritten += 1;
            match order {
                KeyOrder::MoveToEnd => moved.push((new_key, value)),
                KeyOrder::InPlace => {
                    kept.insert(new_key, value);
                }
            }
        } else if !kept.contains_key(&key) {
            kept.insert(key, value);
        }
    }

    kept.extend(moved);
    *entries = kept;
    rewritten
}
