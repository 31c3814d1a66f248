//! README template substitution

use super::rule::{RewriteRule, apply_all};

/// Replace template tokens in order
///
/// Each rule runs once over the result of the previous ones. Text produced by
/// a replacement is not scanned again by that same rule, so a replacement that
/// contains its own token does not recurse.
pub fn rewrite_template(text: &str, substitutions: &[RewriteRule]) -> String {
    apply_all(text, substitutions)
}

/// Count token occurrences that `substitutions` will replace in `text`
pub fn count_matches(text: &str, substitutions: &[RewriteRule]) -> usize {
    let mut current = text.to_string();
    let mut count = 0;
    for rule in substitutions {
        if rule.matches(&current) {
            count += current.matches(rule.token.as_str()).count();
            current = rule.apply(&current);
        }
    }
    count
}
