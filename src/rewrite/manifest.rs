//! Manifest metadata fields and section locations

use serde_json::{Map, Value, json};

use crate::config::VendorIdentity;
use crate::identity::PackageIdentity;

/// Namespace-keyed autoload maps, as JSON pointers
pub const NAMESPACE_MAPS: [&str; 2] = ["/autoload/psr-4", "/autoload-dev/psr-4"];

/// Laravel service provider list
pub const PROVIDERS: &str = "/extra/laravel/providers";

/// Laravel facade alias map
pub const ALIASES: &str = "/extra/laravel/aliases";

/// Replace the author list with the vendor as sole author
pub fn set_author(manifest: &mut Map<String, Value>, vendor: &VendorIdentity) {
    manifest.insert(
        "authors".to_string(),
        json!([{ "name": vendor.name, "email": vendor.email }]),
    );
}

/// Set `name` to `vendor/package` and `description` to the user's text
///
/// Existing fields keep their position; missing ones are appended.
pub fn set_package_info(
    manifest: &mut Map<String, Value>,
    vendor: &VendorIdentity,
    identity: &PackageIdentity,
    description: &str,
) {
    manifest.insert(
        "name".to_string(),
        Value::String(format!("{}/{}", vendor.slug(), identity.raw_name)),
    );
    manifest.insert(
        "description".to_string(),
        Value::String(description.to_string()),
    );
}
