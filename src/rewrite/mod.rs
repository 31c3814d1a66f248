//! Placeholder substitution engine
//!
//! Rewrites a skeleton's manifest and README template in memory. Nothing in
//! here touches the filesystem; the caller decides what gets persisted.
//!
//! - [`rule`]: literal token replacement rules
//! - [`keys`]: namespace rewriting of map keys (`autoload.psr-4`)
//! - [`values`]: provider/alias rewriting (`extra.laravel`)
//! - [`template`]: README token substitution
//! - [`manifest`]: author and package metadata fields
//! - [`pipeline`]: the full run, in order

pub mod keys;
pub mod manifest;
pub mod pipeline;
pub mod rule;
pub mod template;
pub mod values;

pub use keys::rewrite_keys;
pub use pipeline::{Answers, RewriteSummary, Rewritten, run};
pub use values::rewrite_values;

/// Real namespace prefix for a vendor and package, e.g. `Acme\Widget\`
pub fn namespace(vendor: &str, studly: &str) -> String {
    format!("{vendor}\\{studly}\\")
}
