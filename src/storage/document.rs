//! Document model
//!
//! The Document is the whole database: a mapping from table name to Table,
//! where each Table maps keys to arbitrary JSON values.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::error::{JndbError, Result};

/// A named mapping from key to JSON value
pub type Table = Map<String, Value>;

/// The entire database
///
/// ## Invariants
/// - Every entry of `tables` is a JSON object (checked on parse, kept by
///   every mutator)
/// - Enumeration order follows insertion order, both for tables and for
///   keys within a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    tables: Map<String, Value>,
}

impl Document {
    /// Indentation used when writing the file
    pub const INDENT: &'static [u8] = b"\t";

    /// Create an empty Document (`{}`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a Document from raw file contents
    ///
    /// Fails with `CorruptDocument` if the bytes are not JSON, if the root
    /// is not an object, or if any table is not an object.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let root: Value = serde_json::from_slice(bytes)
            .map_err(|e| JndbError::CorruptDocument(e.to_string()))?;

        let tables = match root {
            Value::Object(tables) => tables,
            other => {
                return Err(JndbError::CorruptDocument(format!(
                    "expected an object at the root, found {}",
                    json_type_name(&other)
                )))
            }
        };

        if let Some((name, value)) = tables.iter().find(|(_, v)| !v.is_object()) {
            return Err(JndbError::CorruptDocument(format!(
                "table '{}' is {}, expected an object",
                name,
                json_type_name(value)
            )));
        }

        Ok(Self { tables })
    }

    /// Serialize to pretty-printed, tab-indented JSON
    pub fn to_vec_pretty(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(Self::INDENT));
        self.tables
            .serialize(&mut serializer)
            .map_err(|e| JndbError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    // =========================================================================
    // Table Access
    // =========================================================================

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name).and_then(Value::as_object)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.get_mut(name).and_then(Value::as_object_mut)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Add an empty table
    ///
    /// Returns `false` (and leaves the existing table untouched) if the
    /// table is already present.
    pub fn create_table(&mut self, name: &str) -> bool {
        if self.tables.contains_key(name) {
            return false;
        }
        self.tables
            .insert(name.to_string(), Value::Object(Table::new()));
        true
    }

    /// Remove a table, returning its contents if it existed
    pub fn remove_table(&mut self, name: &str) -> Option<Table> {
        // shift_remove keeps the enumeration order of the remaining tables
        match self.tables.shift_remove(name) {
            Some(Value::Object(table)) => Some(table),
            _ => None,
        }
    }

    /// Table names in enumeration order
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
