//! Package identity errors

use super::ConfigureError;

/// Creates an invalid package name error
pub fn invalid_name(name: impl Into<String>) -> ConfigureError {
    ConfigureError::InvalidPackageName { name: name.into() }
}
