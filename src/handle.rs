//! Handle
//!
//! Front-end that is bound to a table from construction. Same engine as
//! [`Connection`](crate::Connection), different calling convention:
//!
//! | Handle           | Engine          |
//! |------------------|-----------------|
//! | `switch`         | `select_table`  |
//! | `create`         | `create_table`  |
//! | `collapse`       | `drop_table`    |
//! | `obtain`         | `fetch`         |
//! | `remove`         | `delete`        |
//! | `get_all_tables` | `fetch_all`     |
//! | `array`          | `fetch_array`   |

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{JndbError, Result};
use crate::key::Key;
use crate::storage::Table;

/// Handle with its table selected at construction
///
/// Derefs to [`Engine`] for the shared operations.
#[derive(Debug)]
pub struct Handle {
    engine: Engine,
}

impl Handle {
    /// Open a handle on `table`, creating the storage file and the table
    /// if needed
    ///
    /// Fails with `MissingTableName` if `table` is empty.
    pub fn open(table: &str, config: Config) -> Result<Self> {
        if table.is_empty() {
            return Err(JndbError::MissingTableName);
        }

        let mut engine = Engine::open(config)?;
        engine.select_table(table)?;
        Ok(Self { engine })
    }

    pub fn switch(&mut self, table: &str) -> Result<&mut Self> {
        self.engine.select_table(table)?;
        Ok(self)
    }

    pub fn create(&mut self, table: &str) -> Result<bool> {
        self.engine.create_table(table)
    }

    pub fn collapse(&mut self, table: &str) -> Result<()> {
        self.engine.drop_table(table)
    }

    pub fn obtain<K: Into<Key>>(&mut self, key: K) -> Result<Option<Value>> {
        self.engine.fetch(key)
    }

    pub fn remove<K: Into<Key>>(&mut self, key: K) -> Result<&mut Self> {
        self.engine.delete(key)?;
        Ok(self)
    }

    pub fn get_all_tables(&self) -> Result<Table> {
        self.engine.fetch_all()
    }

    pub fn array(&self) -> Result<Vec<Table>> {
        self.engine.fetch_array()
    }

    pub fn into_engine(self) -> Engine {
        self.engine
    }
}

impl Deref for Handle {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        &self.engine
    }
}

impl DerefMut for Handle {
    fn deref_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}
