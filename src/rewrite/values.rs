//! Provider and alias rewriting
//!
//! Laravel packages register their service providers as a list and their
//! facades as an alias map (`"Package" => "Vendor\Package\Facades\Package"`).
//! Values get the full namespace treatment; alias keys only have the generic
//! package token replaced.

use serde_json::{Map, Value};

use super::namespace;
use super::rule::{RewriteRule, apply_all};
use crate::config::Placeholders;

/// Rewrite string values of a provider list or alias map
///
/// A value is rewritten only if it contains the namespace placeholder. The
/// namespace goes first since it shares text with the generic token; the
/// provider class goes before the generic token for the same reason.
///
/// Map keys have the generic token replaced whether or not their value
/// matched, and keep their position. Non-string values, and anything that is
/// neither a list nor a map, are left alone.
///
/// Returns the number of rewritten values.
pub fn rewrite_values(
    list: &mut Value,
    placeholders: &Placeholders,
    vendor: &str,
    studly: &str,
) -> usize {
    let rules = value_rules(placeholders, vendor, studly);
    let [namespace_rule, _, _] = &rules;

    match list {
        Value::Array(items) => items
            .iter_mut()
            .map(|item| rewrite_string(item, namespace_rule, &rules))
            .filter(|changed| *changed)
            .count(),
        Value::Object(entries) => {
            let key_rule = RewriteRule::new(placeholders.package.as_str(), studly);
            let mut rewritten = 0;
            let mut result = Map::new();

            for (key, mut value) in std::mem::take(entries) {
                if rewrite_string(&mut value, namespace_rule, &rules) {
                    rewritten += 1;
                }
                let new_key = key_rule.apply(&key);
                if new_key != key {
                    tracing::debug!("alias key {key:?} -> {new_key:?}");
                }
                result.insert(new_key, value);
            }

            *entries = result;
            rewritten
        }
        _ => 0,
    }
}

fn value_rules(placeholders: &Placeholders, vendor: &str, studly: &str) -> [RewriteRule; 3] {
    [
        RewriteRule::new(placeholders.namespace.as_str(), namespace(vendor, studly)),
        RewriteRule::new(
            placeholders.provider.as_str(),
            format!("{studly}ServiceProvider"),
        ),
        RewriteRule::new(placeholders.package.as_str(), studly),
    ]
}

fn rewrite_string(
    value: &mut Value,
    namespace_rule: &RewriteRule,
    rules: &[RewriteRule],
) -> bool {
    let Value::String(text) = value else {
        return false;
    };
    if !namespace_rule.matches(text) {
        return false;
    }

    let new_text = apply_all(text, rules);
    tracing::debug!("value {text:?} -> {new_text:?}");
    *text = new_text;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rewrite(list: &mut Value) -> usize {
        rewrite_values(list, &Placeholders::default(), "Acme", "Widget")
    }

    #[test]
    fn test_provider_list() {
        let mut providers = json!(["Vendor\\Package\\PackageServiceProvider"]);
        assert_eq!(rewrite(&mut providers), 1);
        assert_eq!(providers, json!(["Acme\\Widget\\WidgetServiceProvider"]));
    }

    #[test]
    fn test_provider_list_keeps_foreign_entries() {
        let mut providers = json!([
            "Spatie\\LaravelData\\LaravelDataServiceProvider",
            "Vendor\\Package\\PackageServiceProvider",
            42
        ]);
        assert_eq!(rewrite(&mut providers), 1);
        assert_eq!(
            providers,
            json!([
                "Spatie\\LaravelData\\LaravelDataServiceProvider",
                "Acme\\Widget\\WidgetServiceProvider",
                42
            ])
        );
    }

    #[test]
    fn test_alias_map_rewrites_key_and_value() {
        let mut aliases = json!({ "Package": "Vendor\\Package\\Facades\\Package" });
        assert_eq!(rewrite(&mut aliases), 1);
        assert_eq!(aliases, json!({ "Widget": "Acme\\Widget\\Facades\\Widget" }));
    }

    #[test]
    fn test_alias_key_rewritten_even_if_value_does_not_match() {
        let mut aliases = json!({
            "PackageHelper": "Illuminate\\Support\\Str",
            "Package": "Vendor\\Package\\Facades\\Package"
        });
        assert_eq!(rewrite(&mut aliases), 1);

        let keys: Vec<&str> = aliases
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["WidgetHelper", "Widget"]);
        assert_eq!(aliases["WidgetHelper"], "Illuminate\\Support\\Str");
    }

    #[test]
    fn test_namespace_replaced_before_generic_token() {
        let mut providers = json!(["Vendor\\Package\\Http\\PackageController"]);
        rewrite(&mut providers);
        assert_eq!(providers, json!(["Acme\\Widget\\Http\\WidgetController"]));
    }

    #[test]
    fn test_studly_name_containing_placeholder_is_touched_again() {
        let mut providers = json!(["Vendor\\Package\\PackageServiceProvider"]);
        rewrite_values(&mut providers, &Placeholders::default(), "Acme", "PackageTools");
        assert_eq!(
            providers,
            json!(["Acme\\PackageToolsTools\\PackageToolsToolsServiceProvider"])
        );
    }

    #[test]
    fn test_value_without_namespace_untouched() {
        let mut providers = json!(["PackageServiceProvider"]);
        assert_eq!(rewrite(&mut providers), 0);
        assert_eq!(providers, json!(["PackageServiceProvider"]));
    }

    #[test]
    fn test_non_collection_is_noop() {
        let mut scalar = json!("Vendor\\Package\\PackageServiceProvider");
        assert_eq!(rewrite(&mut scalar), 0);
        assert_eq!(scalar, json!("Vendor\\Package\\PackageServiceProvider"));

        let mut null = Value::Null;
        assert_eq!(rewrite(&mut null), 0);
    }

    #[test]
    fn test_custom_placeholders() {
        let placeholders = Placeholders {
            namespace: "Skeleton\\Core\\".to_string(),
            provider: "CoreServiceProvider".to_string(),
            package: "Core".to_string(),
        };
        let mut providers = json!(["Skeleton\\Core\\CoreServiceProvider"]);
        rewrite_values(&mut providers, &placeholders, "Acme", "Widget");
        assert_eq!(providers, json!(["Acme\\Widget\\WidgetServiceProvider"]));
    }
}
