//! Manifest errors

use super::ConfigureError;

/// Creates a malformed manifest error
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> ConfigureError {
    ConfigureError::MalformedManifest {
        path: path.into(),
        reason: reason.into(),
    }
}
