//! Configuration for jndb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a jndb connection
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the storage file
    pub path: PathBuf,

    /// Name of the storage file inside `path`
    pub file_name: String,

    // -------------------------------------------------------------------------
    // Cache Configuration
    // -------------------------------------------------------------------------
    /// Length the recently-used queue reaches before an insert/fetch
    /// ages its oldest key out
    pub recent_keys_limit: usize,
}

impl Config {
    pub const DEFAULT_PATH: &'static str = ".";
    pub const DEFAULT_FILE_NAME: &'static str = "jndb.json";
    pub const DEFAULT_RECENT_KEYS_LIMIT: usize = 5;

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the storage file (`{path}/{file_name}`)
    ///
    /// Empty components fall back to their defaults.
    pub fn file_path(&self) -> PathBuf {
        let dir = if self.path.as_os_str().is_empty() {
            PathBuf::from(Self::DEFAULT_PATH)
        } else {
            self.path.clone()
        };
        let file_name = if self.file_name.is_empty() {
            Self::DEFAULT_FILE_NAME
        } else {
            &self.file_name
        };
        dir.join(file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(Self::DEFAULT_PATH),
            file_name: Self::DEFAULT_FILE_NAME.to_string(),
            recent_keys_limit: Self::DEFAULT_RECENT_KEYS_LIMIT,
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the directory holding the storage file
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the storage file name
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.config.file_name = name.into();
        self
    }

    /// Set the recently-used queue limit
    pub fn recent_keys_limit(mut self, limit: usize) -> Self {
        self.config.recent_keys_limit = limit;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
