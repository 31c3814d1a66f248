//! Settings file errors

use super::ConfigureError;

/// Creates a settings parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfigureError {
    ConfigureError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a settings read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ConfigureError {
    ConfigureError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
