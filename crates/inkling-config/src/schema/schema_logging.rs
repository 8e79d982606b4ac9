//! Logging configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::loader::ConfigLoader;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rolling log files. Console only when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

impl LoggingConfig {
    /// Log directory with `~` expanded.
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir
            .as_deref()
            .map(|dir| PathBuf::from(ConfigLoader::expand_path(dir)))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
