//! Engine Module
//!
//! The core engine shared by both front-ends ([`Connection`] and
//! [`Handle`]).
//!
//! ## Responsibilities
//! - Track the active table
//! - Run table lifecycle and key-level operations against the Document
//! - Keep the mirror cache in step with inserts, fetches, and deletes
//! - Hand every mutated Document to the [`WriteNotifier`]
//!
//! [`Connection`]: crate::Connection
//! [`Handle`]: crate::Handle

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::cache::MirrorCache;
use crate::config::Config;
use crate::error::{JndbError, Result};
use crate::key::Key;
use crate::notifier::WriteNotifier;
use crate::storage::{Document, StorageFile, Table};

/// The main engine
///
/// ## Consistency Model: Read-Modify-Write per call
///
/// - Every operation reads the whole Document fresh from disk
/// - Mutations change that copy and rewrite the whole file before returning
/// - Nothing is held between calls except the active table name and the
///   mirror cache, so an engine always reads its own writes
///
/// No lock is taken over the file. Two engines on the same file race: the
/// last write wins, and since each write replaces the whole Document it can
/// clobber a table another engine updated in between.
#[derive(Debug)]
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Persistence boundary (owns the storage file)
    notifier: WriteNotifier,

    /// Table targeted by key-level operations
    table: Option<String>,

    /// Mirrors of recently touched values
    cache: MirrorCache,
}

impl Engine {
    /// Open an engine on the storage file named by `config`
    ///
    /// Creates the file as `{}` if it does not exist yet. No table is
    /// selected.
    pub fn open(config: Config) -> Result<Self> {
        let path = config.file_path();
        let storage = StorageFile::open(&path)?;

        tracing::debug!("Opened jndb store at {}", path.display());

        Ok(Self {
            cache: MirrorCache::new(config.recent_keys_limit),
            notifier: WriteNotifier::new(storage),
            table: None,
            config,
        })
    }

    /// Open with a directory (convenience method)
    ///
    /// Uses default config with the specified directory.
    pub fn open_path(dir: &Path) -> Result<Self> {
        Self::open(Config::builder().path(dir).build())
    }

    // =========================================================================
    // Table Lifecycle
    // =========================================================================

    /// Make `name` the active table, creating it empty if absent
    ///
    /// A newly created table is persisted immediately. Switching to a
    /// different table, or recreating the active one, drops all mirrors.
    pub fn select_table(&mut self, name: &str) -> Result<&mut Self> {
        if name.is_empty() {
            return Err(JndbError::MissingTableName);
        }

        let mut document = self.notifier.load()?;
        let created = document.create_table(name);
        if created {
            tracing::debug!("Created table '{}' on selection", name);
            self.notifier.notify(&document)?;
        }

        // A freshly created table has nothing left to mirror, even if it
        // was already active before being dropped elsewhere
        if created || self.table.as_deref() != Some(name) {
            self.cache.clear();
            self.table = Some(name.to_string());
        }

        Ok(self)
    }

    /// Create an empty table if it does not exist yet
    ///
    /// Does not change the active table. Returns `true` if the table was
    /// created.
    pub fn create_table(&mut self, name: &str) -> Result<bool> {
        if name.is_empty() {
            return Err(JndbError::MissingTableName);
        }

        let mut document = self.notifier.load()?;
        if !document.create_table(name) {
            return Ok(false);
        }

        tracing::debug!("Created table '{}'", name);
        self.notifier.notify(&document)?;
        Ok(true)
    }

    /// Remove a table and all of its keys
    ///
    /// The active table stays selected even if it is the one dropped;
    /// selecting it again recreates it empty.
    pub fn drop_table(&mut self, name: &str) -> Result<()> {
        let mut document = self.notifier.load()?;
        let removed = document
            .remove_table(name)
            .ok_or_else(|| JndbError::TableNotFound(name.to_string()))?;

        tracing::debug!("Dropped table '{}' ({} keys)", name, removed.len());
        self.notifier.notify(&document)?;

        if self.table.as_deref() == Some(name) {
            self.cache.clear();
        }

        Ok(())
    }

    /// Names of all tables in the Document
    pub fn tables(&self) -> Result<Vec<String>> {
        Ok(self.notifier.load()?.table_names())
    }

    /// Check whether a table exists in the Document
    pub fn has_table(&self, name: &str) -> Result<bool> {
        Ok(self.notifier.load()?.contains_table(name))
    }

    // =========================================================================
    // Key-Level Operations
    // =========================================================================

    /// Write `value` at `key` in the active table, overwriting silently
    ///
    /// Steps:
    /// 1. Run the mirror eviction check
    /// 2. Write the value into the Document
    /// 3. Persist
    /// 4. Mirror the value and record `key` as recently used
    ///
    /// A failed write leaves the mirror and the recently-used queue as they
    /// were after step 1.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<&mut Self>
    where
        K: Into<Key>,
        V: Serialize,
    {
        let table = self.active_table()?;
        let key = key.into();
        let value = to_json(value)?;

        self.cache.check_unused();

        let mut document = self.notifier.load()?;
        Self::table_of_mut(&mut document, &table)?.insert(key.to_string(), value.clone());
        self.notifier.notify(&document)?;

        self.cache.mirror(key.clone(), value);
        self.cache.touch(key);
        Ok(self)
    }

    /// Read `key` from the active table
    ///
    /// Returns `Ok(None)` only when the key is absent; stored `null`,
    /// `false`, `0`, and `""` come back as `Some`. A found value is mirrored
    /// (unless a mirror already exists) and recorded as recently used.
    pub fn fetch<K: Into<Key>>(&mut self, key: K) -> Result<Option<Value>> {
        let table = self.active_table()?;
        let key = key.into();

        self.cache.check_unused();

        let document = self.notifier.load()?;
        let value = Self::table_of(&document, &table)?
            .get(key.as_str())
            .cloned();

        if let Some(value) = &value {
            if !self.cache.contains(key.as_str()) {
                self.cache.mirror(key.clone(), value.clone());
            }
            self.cache.touch(key);
        }

        Ok(value)
    }

    /// Read `key` and deserialize it into `T`
    pub fn fetch_as<K, T>(&mut self, key: K) -> Result<Option<T>>
    where
        K: Into<Key>,
        T: DeserializeOwned,
    {
        self.fetch(key)?
            .map(|value| {
                serde_json::from_value(value).map_err(|e| JndbError::Serialization(e.to_string()))
            })
            .transpose()
    }

    /// Check whether `key` exists in the active table
    pub fn has<K: Into<Key>>(&self, key: K) -> Result<bool> {
        let table = self.active_table()?;
        let key = key.into();

        let document = self.notifier.load()?;
        Ok(Self::table_of(&document, &table)?.contains_key(key.as_str()))
    }

    /// Remove `key` from the active table and from the mirror
    ///
    /// Deleting an absent key is a no-op and writes nothing.
    pub fn delete<K: Into<Key>>(&mut self, key: K) -> Result<&mut Self> {
        let table = self.active_table()?;
        let key = key.into();

        let mut document = self.notifier.load()?;
        if Self::table_of_mut(&mut document, &table)?
            .shift_remove(key.as_str())
            .is_none()
        {
            return Ok(self);
        }

        self.notifier.notify(&document)?;
        self.cache.remove(key.as_str());
        Ok(self)
    }

    /// Fetch-or-insert
    ///
    /// Returns the existing value if `key` is present, otherwise inserts
    /// `default` and returns it. The read and the write are separate file
    /// operations.
    pub fn secure<K, V>(&mut self, key: K, default: V) -> Result<Value>
    where
        K: Into<Key>,
        V: Serialize,
    {
        self.active_table()?;
        let key = key.into();

        if let Some(existing) = self.fetch(&key)? {
            return Ok(existing);
        }

        let default = to_json(default)?;
        self.insert(key, default.clone())?;
        Ok(default)
    }

    /// The whole active table
    pub fn fetch_all(&self) -> Result<Table> {
        let table = self.active_table()?;
        let mut document = self.notifier.load()?;
        document
            .remove_table(&table)
            .ok_or(JndbError::TableNotFound(table))
    }

    /// The active table as single-entry `{key: value}` maps, in enumeration
    /// order
    pub fn fetch_array(&self) -> Result<Vec<Table>> {
        Ok(self
            .fetch_all()?
            .into_iter()
            .map(|(key, value)| {
                let mut entry = Table::new();
                entry.insert(key, value);
                entry
            })
            .collect())
    }

    /// Number of keys in the active table, read fresh from disk
    pub fn count(&self) -> Result<usize> {
        let table = self.active_table()?;
        let document = self.notifier.load()?;
        Ok(Self::table_of(&document, &table)?.len())
    }

    /// Single-pass iterator over the values of the active table
    ///
    /// The table is read once when the iterator is created.
    pub fn iter(&self) -> Result<Values> {
        Ok(Values {
            entries: self.fetch_all()?.into_iter(),
        })
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Name of the active table, if one is selected
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Path of the storage file
    pub fn path(&self) -> &Path {
        self.notifier.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mirrored value for `key`, if it is currently mirrored
    pub fn mirrored<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        self.cache.get(key.into().as_str())
    }

    /// Keys that currently have a mirror, in no particular order
    pub fn mirrored_keys(&self) -> Vec<&Key> {
        self.cache.keys().collect()
    }

    /// Recently-used queue, oldest first
    pub fn recent_keys(&self) -> Vec<&Key> {
        self.cache.recent().iter().collect()
    }

    /// Number of writes persisted through this engine
    pub fn writes(&self) -> u64 {
        self.notifier.writes()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn active_table(&self) -> Result<String> {
        self.table.clone().ok_or(JndbError::NoTableSelected)
    }

    fn table_of<'a>(document: &'a Document, name: &str) -> Result<&'a Table> {
        document
            .table(name)
            .ok_or_else(|| JndbError::TableNotFound(name.to_string()))
    }

    fn table_of_mut<'a>(document: &'a mut Document, name: &str) -> Result<&'a mut Table> {
        document
            .table_mut(name)
            .ok_or_else(|| JndbError::TableNotFound(name.to_string()))
    }
}

/// Iterator over the values of a table, in enumeration order
///
/// Finite and not restartable: create a new one with [`Engine::iter`] to
/// iterate again.
pub struct Values {
    entries: serde_json::map::IntoIter,
}

impl Iterator for Values {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

fn to_json<V: Serialize>(value: V) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| JndbError::Serialization(e.to_string()))
}
