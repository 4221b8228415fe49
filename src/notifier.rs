//! Write Notifier
//!
//! The single persistence boundary between "compute the new Document" and
//! "put it on disk". Every mutation hands its full Document to
//! [`WriteNotifier::notify`], which serializes it and overwrites the storage
//! file before returning.
//!
//! There is no queue and no background flushing: the write runs inline, so
//! when a mutating call returns its effect is already on disk.

use std::path::Path;

use crate::error::Result;
use crate::storage::{Document, StorageFile};

/// Owns the storage file and performs every write to it
#[derive(Debug)]
pub struct WriteNotifier {
    storage: StorageFile,

    /// Number of writes performed (for testing and debugging)
    writes: u64,
}

impl WriteNotifier {
    pub fn new(storage: StorageFile) -> Self {
        Self { storage, writes: 0 }
    }

    /// Persist `document`, replacing the whole file
    pub fn notify(&mut self, document: &Document) -> Result<()> {
        self.storage.save(document)?;
        self.writes += 1;
        tracing::debug!(
            "Persisted document to {} (write #{})",
            self.storage.path().display(),
            self.writes
        );
        Ok(())
    }

    /// Read the current Document from disk
    pub fn load(&self) -> Result<Document> {
        self.storage.load()
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }
}
