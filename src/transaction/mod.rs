//! Transaction support for writing the rewritten skeleton
//!
//! The manifest and the template are written as one unit: if any write fails,
//! files already written are restored to their original content, so the
//! skeleton is never left half-configured.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! transaction.write(&manifest_path, &manifest)?;
//! transaction.write(&template_path, &template)?;
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // rollback happens automatically
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Original content of a file touched by the transaction
#[derive(Debug, Clone)]
struct FileBackup {
    /// Original path
    path: PathBuf,
    /// Backed up content
    content: Vec<u8>,
}

/// A transaction over a set of file writes
#[derive(Debug)]
pub struct Transaction {
    /// Files created during this transaction
    created_files: HashSet<PathBuf>,

    /// Files modified during this transaction (with original content)
    modified_files: Vec<FileBackup>,

    /// Whether the transaction has been committed
    committed: bool,

    /// Whether rollback is enabled (can be disabled for testing)
    rollback_enabled: bool,
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Transaction {
    /// Create a new, empty transaction
    pub fn new() -> Self {
        Self {
            created_files: HashSet::new(),
            modified_files: Vec::new(),
            committed: false,
            rollback_enabled: true,
        }
    }

    /// Write `contents` to `path`, remembering what was there before
    pub fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.backup(path)?;

        fs::write(path, contents)
            .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
        tracing::debug!("wrote {}", path.display());

        Ok(())
    }

    fn backup(&mut self, path: &Path) -> Result<()> {
        let already_tracked = self.created_files.contains(path)
            || self.modified_files.iter().any(|b| b.path == path);
        if already_tracked {
            return Ok(());
        }

        if path.exists() {
            let content = fs::read(path)
                .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;
            self.modified_files.push(FileBackup {
                path: path.to_path_buf(),
                content,
            });
        } else {
            self.created_files.insert(path.to_path_buf());
        }

        Ok(())
    }

    /// Number of files touched so far
    pub fn touched(&self) -> usize {
        self.created_files.len() + self.modified_files.len()
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Manually trigger a rollback
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }

        // Remove created files
        for path in &self.created_files {
            if path.exists() {
                let _ = fs::remove_file(path);
            }
        }

        // Restore modified files
        for backup in &self.modified_files {
            if let Err(e) = fs::write(&backup.path, &backup.content) {
                tracing::warn!("Failed to restore {}: {}", backup.path.display(), e);
            }
        }

        self.created_files.clear();
        self.modified_files.clear();
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed && self.rollback_enabled {
            // Automatic rollback on drop if not committed
            self.rollback();
        }
    }
}
