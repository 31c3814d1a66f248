//! Common test utilities for barista-configure integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Manifest shipped with the Laravel package skeleton
pub const SKELETON_MANIFEST: &str = r#"{
    "name": "vendor/package",
    "description": ":package_description",
    "keywords": [
        "laravel",
        "package"
    ],
    "homepage": "https://github.com/vendor/package",
    "license": "MIT",
    "authors": [
        {
            "name": ":author_name",
            "email": "author@domain.com"
        }
    ],
    "require": {
        "php": "^8.2",
        "illuminate/contracts": "^11.0"
    },
    "autoload": {
        "psr-4": {
            "Vendor\\Package\\": "src/",
            "Vendor\\Package\\Database\\Factories\\": "database/factories/"
        }
    },
    "autoload-dev": {
        "psr-4": {
            "Vendor\\Package\\Tests\\": "tests/"
        }
    },
    "extra": {
        "laravel": {
            "providers": [
                "Vendor\\Package\\PackageServiceProvider"
            ],
            "aliases": {
                "Package": "Vendor\\Package\\Facades\\Package"
            }
        }
    },
    "minimum-stability": "dev",
    "prefer-stable": true
}
"#;

/// README template shipped with the skeleton
pub const SKELETON_README: &str = "# :package

:package_description

## Installation

```bash
composer require :vendor/:package
```

## Credits

- [:author_name](https://github.com/:author_username)
";

/// A package skeleton in a temporary directory
pub struct TestSkeleton {
    /// Temporary directory, removed on drop
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the skeleton root
    pub path: PathBuf,
}

impl TestSkeleton {
    /// Create an empty skeleton directory named `name`
    pub fn empty(name: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join(name);
        std::fs::create_dir_all(&path).expect("Failed to create skeleton directory");
        Self { temp, path }
    }

    /// Create a full Laravel skeleton with manifest, README and bootstrap script
    pub fn new() -> Self {
        let skeleton = Self::empty("skeleton");
        skeleton.write_file("composer.json", SKELETON_MANIFEST);
        skeleton.write_file("README.md", SKELETON_README);
        skeleton.write_file("configure.php", "<?php\n// bootstrap\n");
        skeleton
    }

    /// Write a file in the skeleton
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the skeleton
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read and parse the manifest
    #[allow(dead_code)]
    pub fn read_manifest(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file("composer.json")).expect("Manifest is not JSON")
    }

    /// Check if a file exists in the skeleton
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestSkeleton {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn configure_cmd() -> Command {
    let mut cmd = Command::cargo_bin("barista-configure").expect("binary is built");
    cmd.env_remove("BARISTA_CONFIG")
        .env_remove("BARISTA_PROJECT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Command running in `dir`, with no prompts
#[allow(dead_code)]
pub fn configure_cmd_in(dir: &std::path::Path) -> Command {
    let mut cmd = configure_cmd();
    cmd.current_dir(dir);
    cmd
}
