//! Skeleton project files
//!
//! Locates the manifest and README template inside a freshly cloned package
//! skeleton, reads them, and renders the rewritten manifest back to text.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::Settings;
use crate::error::{self, Result};

/// Indentation used when writing the manifest, matching Composer's own
const MANIFEST_INDENT: &[u8] = b"    ";

/// A package skeleton on disk
#[derive(Debug, Clone)]
pub struct Project {
    /// Root directory of the skeleton
    pub root: PathBuf,

    /// Path to the manifest (composer.json)
    pub manifest_path: PathBuf,

    /// Path to the README template
    pub template_path: PathBuf,
}

impl Project {
    /// Open the skeleton at `root`
    ///
    /// The manifest must exist; the template is optional.
    pub fn open(root: &Path, settings: &Settings) -> Result<Self> {
        if !root.is_dir() {
            return Err(error::fs::not_found(root.display().to_string()));
        }

        let manifest_path = root.join(&settings.manifest);
        if !manifest_path.is_file() {
            return Err(error::fs::not_found(manifest_path.display().to_string()));
        }

        Ok(Self {
            root: root.to_path_buf(),
            manifest_path,
            template_path: root.join(&settings.template),
        })
    }

    /// Read and parse the manifest
    pub fn read_manifest(&self) -> Result<Value> {
        let content = read_file(&self.manifest_path)?;
        parse_manifest(&content, &self.manifest_path)
    }

    /// Read the template, if the skeleton has one
    pub fn read_template(&self) -> Result<Option<String>> {
        if !self.template_path.exists() {
            tracing::warn!(
                "template {} not found, skipping",
                self.template_path.display()
            );
            return Ok(None);
        }
        read_file(&self.template_path).map(Some)
    }

    /// Package name suggested when the user enters none: the directory name
    pub fn default_package_name(&self) -> Option<String> {
        let root = fs::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());
        root.file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
    }

    /// Resolve a project-relative path
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))
}

/// Parse manifest text, requiring a top-level JSON object
pub fn parse_manifest(content: &str, path: &Path) -> Result<Value> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| error::manifest::malformed(path.display().to_string(), e.to_string()))?;

    if !value.is_object() {
        return Err(error::manifest::malformed(
            path.display().to_string(),
            "top-level value must be a JSON object",
        ));
    }

    Ok(value)
}

/// Render the manifest with four-space indentation and a trailing newline
///
/// Key order is kept as parsed and forward slashes are written as-is.
pub fn render_manifest(manifest: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(MANIFEST_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    manifest
        .serialize(&mut serializer)
        .map_err(|e| error::ConfigureError::IoError {
            message: e.to_string(),
        })?;

    let mut rendered = String::from_utf8(buf).map_err(|e| error::ConfigureError::IoError {
        message: e.to_string(),
    })?;
    rendered.push('\n');
    Ok(rendered)
}
