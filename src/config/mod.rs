//! Configurator settings (barista.yaml)
//!
//! Everything the rewrite pipeline needs to know besides the user's answers:
//! the vendor identity that gets branded into the package, the placeholder
//! tokens the skeleton ships with, and where the skeleton keeps its files.
//!
//! All fields are optional in the YAML file; missing ones fall back to the
//! Barista skeleton defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Settings filename looked up in the project directory
pub const SETTINGS_FILE: &str = "barista.yaml";

/// Vendor identity written into the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorIdentity {
    /// Vendor name, used as namespace segment and author name
    pub name: String,

    /// Contact email for the author block
    pub email: String,
}

impl Default for VendorIdentity {
    fn default() -> Self {
        Self {
            name: "Barista".to_string(),
            email: "contact@barista-php.com".to_string(),
        }
    }
}

impl VendorIdentity {
    /// Vendor prefix used in the manifest `name` field
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Placeholder tokens found in manifest keys and values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    /// Full namespace placeholder, e.g. `Vendor\Package\`
    pub namespace: String,

    /// Service provider class placeholder
    pub provider: String,

    /// Generic package placeholder
    pub package: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            namespace: "Vendor\\Package\\".to_string(),
            provider: "PackageServiceProvider".to_string(),
            package: "Package".to_string(),
        }
    }
}

/// Placeholder tokens found in the README template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateTokens {
    pub description: String,
    pub vendor: String,
    pub package: String,
    pub author_name: String,
    pub author_username: String,
}

impl Default for TemplateTokens {
    fn default() -> Self {
        Self {
            description: ":package_description".to_string(),
            vendor: ":vendor".to_string(),
            package: ":package".to_string(),
            author_name: ":author_name".to_string(),
            author_username: ":author_username".to_string(),
        }
    }
}

/// Where rewritten namespace keys end up in their map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyOrder {
    /// Rewritten keys are appended after untouched keys
    #[default]
    MoveToEnd,

    /// Rewritten keys keep their original position
    InPlace,
}

/// Complete configurator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub vendor: VendorIdentity,

    pub placeholders: Placeholders,

    pub template_tokens: TemplateTokens,

    /// Author username used when none is entered
    pub default_username: String,

    /// Manifest path, relative to the project directory
    pub manifest: PathBuf,

    /// README template path, relative to the project directory
    pub template: PathBuf,

    /// Files removed after a successful run (the bootstrap entry point)
    pub cleanup: Vec<PathBuf>,

    pub key_order: KeyOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vendor: VendorIdentity::default(),
            placeholders: Placeholders::default(),
            template_tokens: TemplateTokens::default(),
            default_username: "barista-php".to_string(),
            manifest: PathBuf::from("composer.json"),
            template: PathBuf::from("README.md"),
            cleanup: vec![PathBuf::from("configure.php")],
            key_order: KeyOrder::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml)?;
        Ok(settings)
    }

    /// Load settings for a project
    ///
    /// An explicit path must exist. Without one, `barista.yaml` in the project
    /// directory is used when present, otherwise the defaults.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                let path = project_dir.join(path);
                if !path.is_file() {
                    return Err(error::config::read_failed(
                        path.display().to_string(),
                        "file does not exist",
                    ));
                }
                path
            }
            None => {
                let path = project_dir.join(SETTINGS_FILE);
                if !path.is_file() {
                    tracing::debug!(
                        "no {} in {}, using defaults",
                        SETTINGS_FILE,
                        project_dir.display()
                    );
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;
        let settings = match Self::from_yaml(&content) {
            Err(error::ConfigureError::ConfigParseFailed { reason, .. }) => {
                return Err(error::config::parse_failed(
                    path.display().to_string(),
                    reason,
                ));
            }
            other => other?,
        };
        tracing::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }
}
