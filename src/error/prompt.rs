//! Interactive input errors

use super::ConfigureError;

/// Creates a prompt failed error
pub fn failed(message: impl Into<String>) -> ConfigureError {
    ConfigureError::PromptFailed {
        message: message.into(),
    }
}
