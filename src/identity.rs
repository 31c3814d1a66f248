//! Package identity derived from the name the user typed
//!
//! The raw name (e.g. `my-cool-package`) goes into the manifest `name` field;
//! the studly form (`MyCoolPackage`) is used wherever a PHP namespace segment
//! or class name prefix is needed.

use crate::error::{self, Result};

/// The two forms of a package name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    /// Name as typed, hyphenated
    pub raw_name: String,

    /// PascalCase name with hyphens removed
    pub studly_name: String,
}

impl PackageIdentity {
    /// Derive both name forms from the raw package name
    ///
    /// Surrounding whitespace is ignored. Fails when nothing usable is left,
    /// i.e. the name is empty or made of hyphens only.
    pub fn derive(raw_name: &str) -> Result<Self> {
        let raw_name = raw_name.trim();
        let studly_name = studly(raw_name);

        if studly_name.is_empty() {
            return Err(error::package::invalid_name(raw_name));
        }

        Ok(Self {
            raw_name: raw_name.to_string(),
            studly_name,
        })
    }
}

/// Convert a hyphenated name to studly case
///
/// Only the first character of each segment changes; internal capitals are
/// kept, so `fooBar-baz` becomes `FooBarBaz`.
pub fn studly(name: &str) -> String {
    name.split('-').map(capitalize_first).collect()
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
