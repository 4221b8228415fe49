//! Connection
//!
//! Front-end with no table chosen up front: open, then `use_table` before
//! any key-level operation.
//!
//! ```no_run
//! use jndb::{Config, Connection};
//! use serde_json::json;
//!
//! # fn main() -> jndb::Result<()> {
//! let mut db = Connection::open(Config::default())?;
//! db.use_table("users")?;
//! db.insert("john", json!({ "age": 30 }))?;
//! assert_eq!(db.fetch("john")?, Some(json!({ "age": 30 })));
//! # Ok(())
//! # }
//! ```

use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;

/// Handle bound to one storage file, with the table chosen later
///
/// Derefs to [`Engine`] for the shared operations.
#[derive(Debug)]
pub struct Connection {
    engine: Engine,
}

impl Connection {
    /// Open a connection, creating the storage file if needed
    pub fn open(config: Config) -> Result<Self> {
        Ok(Self {
            engine: Engine::open(config)?,
        })
    }

    /// Open with a directory (convenience method)
    pub fn open_path(dir: &Path) -> Result<Self> {
        Ok(Self {
            engine: Engine::open_path(dir)?,
        })
    }

    /// Select the table to use, creating it if absent
    pub fn use_table(&mut self, name: &str) -> Result<&mut Self> {
        self.engine.select_table(name)?;
        Ok(self)
    }

    pub fn into_engine(self) -> Engine {
        self.engine
    }
}

impl Deref for Connection {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        &self.engine
    }
}

impl DerefMut for Connection {
    fn deref_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}
