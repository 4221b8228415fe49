//! # jndb
//!
//! A minimal embedded document store:
//! - One JSON file on disk holds the whole database
//! - The file is split into named tables, each a key → JSON value map
//! - Every operation re-reads the file; every mutation rewrites it
//! - Recently touched values are mirrored on the handle, with bounded
//!   FIFO eviction
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │      Connection      │     │        Handle        │
//! │   (use_table later)  │     │  (table up front)    │
//! └──────────┬───────────┘     └──────────┬───────────┘
//!            └──────────────┬─────────────┘
//!                           ▼
//!                ┌─────────────────────┐      ┌─────────────┐
//!                │       Engine        │─────▶│ MirrorCache │
//!                │ (active table, ops) │      │ RecentKeys  │
//!                └──────────┬──────────┘      └─────────────┘
//!                           │ load / notify
//!                           ▼
//!                ┌─────────────────────┐
//!                │    WriteNotifier    │
//!                └──────────┬──────────┘
//!                           ▼
//!                ┌─────────────────────┐
//!                │ StorageFile (JSON)  │
//!                └─────────────────────┘
//! ```
//!
//! Single-threaded and synchronous: every call finishes its file read and
//! write before returning. There is no locking between handles; the last
//! write wins.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod key;

pub mod storage;
pub mod notifier;
pub mod cache;
pub mod engine;
pub mod connection;
pub mod handle;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{JndbError, Result};
pub use config::Config;
pub use key::Key;
pub use storage::{Document, Table};
pub use engine::{Engine, Values};
pub use connection::Connection;
pub use handle::Handle;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of jndb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
