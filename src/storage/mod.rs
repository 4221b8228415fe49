//! Storage Module
//!
//! Persistent storage layer: one JSON file holding the whole database.
//!
//! ## Responsibilities
//! - Create the storage file on first use
//! - Load and validate the full Document on every read
//! - Rewrite the full Document on every write (no partial updates)
//!
//! ## File Format
//! ```text
//! {
//! 	"<table>": {
//! 		"<key>": <json-value>,
//! 		...
//! 	},
//! 	...
//! }
//! ```
//!
//! UTF-8 JSON, pretty-printed with tab indentation. Writes are plain
//! in-place overwrites: a crash mid-write can leave a truncated file,
//! which the next load reports as a corrupt document.

mod document;
mod file;

pub use document::{Document, Table};
pub use file::StorageFile;
