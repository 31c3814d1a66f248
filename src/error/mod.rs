//! Error types and handling for barista-configure
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest parsing and shape errors
//! - [`package`]: Package identity errors
//! - [`config`]: Settings file errors
//! - [`fs`]: File system errors
//! - [`prompt`]: Interactive input errors

pub mod config;
pub mod fs;
pub mod manifest;
pub mod package;
pub mod prompt;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for configure operations
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigureError {
    // Manifest errors
    #[error("Malformed manifest: {path}: {reason}")]
    #[diagnostic(
        code(barista::manifest::malformed),
        help("The manifest must be a JSON object. Fix the file and run the configurator again")
    )]
    MalformedManifest { path: String, reason: String },

    // Package errors
    #[error("Invalid package name: '{name}'")]
    #[diagnostic(
        code(barista::package::invalid_name),
        help("Package names should be hyphenated words, e.g. my-cool-package")
    )]
    InvalidPackageName { name: String },

    // Configuration errors
    #[error("Failed to parse settings file: {path}: {reason}")]
    #[diagnostic(code(barista::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read settings file: {path}")]
    #[diagnostic(code(barista::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(barista::fs::not_found),
        help("Run the configurator from the root of the package skeleton, or pass --dir")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(barista::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(barista::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(barista::fs::io_error))]
    IoError { message: String },

    // Prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(
        code(barista::prompt::failed),
        help("Pass the values as flags (--name, --description, --username) to skip prompts")
    )]
    PromptFailed { message: String },

    #[error("Configuration cancelled")]
    #[diagnostic(code(barista::prompt::cancelled))]
    Cancelled,

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(barista::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

impl From<std::io::Error> for ConfigureError {
    fn from(err: std::io::Error) -> Self {
        ConfigureError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ConfigureError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigureError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigureError {
    fn from(err: serde_json::Error) -> Self {
        ConfigureError::MalformedManifest {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ConfigureError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => ConfigureError::Cancelled,
            other => ConfigureError::PromptFailed {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ConfigureError>;
