//! Literal token replacement rules

/// A single `token -> replacement` rule
///
/// Matching is literal substring containment. Rules are applied once, in the
/// order given, each to the output of the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub token: String,
    pub replacement: String,
}

impl RewriteRule {
    pub fn new(token: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            replacement: replacement.into(),
        }
    }

    /// Whether the rule would change `text`
    pub fn matches(&self, text: &str) -> bool {
        !self.token.is_empty() && text.contains(&self.token)
    }

    /// Replace every occurrence of the token in `text`
    ///
    /// An empty token never matches.
    pub fn apply(&self, text: &str) -> String {
        if self.token.is_empty() {
            return text.to_string();
        }
        text.replace(&self.token, &self.replacement)
    }
}

/// Apply `rules` in sequence, each to the cumulative result
pub fn apply_all(text: &str, rules: &[RewriteRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
