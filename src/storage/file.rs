//! Storage file access
//!
//! Reads and writes the Document as a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Document;

/// Handle on the on-disk storage file
///
/// Holds no file descriptor and no lock: every `load()` is a full-file read,
/// every `save()` a full-file rewrite.
#[derive(Debug, Clone)]
pub struct StorageFile {
    path: PathBuf,
}

impl StorageFile {
    /// Open the storage file at `path`, creating it as `{}` if absent
    pub fn open(path: &Path) -> Result<Self> {
        Self::ensure_exists(path)?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Write an empty Document to `path` if no file is there yet
    ///
    /// Returns `true` if the file was created.
    pub fn ensure_exists(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, Document::new().to_vec_pretty()?)?;
        tracing::info!("Created storage file {}", path.display());
        Ok(true)
    }

    /// Read and parse the whole Document
    pub fn load(&self) -> Result<Document> {
        let bytes = fs::read(&self.path)?;
        Document::from_slice(&bytes)
    }

    /// Overwrite the file with the whole Document
    ///
    /// Not atomic: the file is truncated and rewritten in place.
    pub fn save(&self, document: &Document) -> Result<()> {
        let bytes = document.to_vec_pretty()?;
        fs::write(&self.path, &bytes)?;
        tracing::trace!(
            "Wrote {} bytes ({} tables) to {}",
            bytes.len(),
            document.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Path of the storage file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
