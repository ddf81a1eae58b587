//! Portal configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Fixed prefix all webhook endpoints hang off of.
pub const DEFAULT_WEBHOOK_BASE: &str = "https://auto.graueducacionalmossoro.com.br/webhook/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the session database file
    pub database_path: PathBuf,
    /// Base URL the webhook paths are resolved against
    pub webhook_base: String,
    /// Per-request timeout; requests stay single-attempt either way
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("painel.db"),
            webhook_base: DEFAULT_WEBHOOK_BASE.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Painel"))
            .unwrap_or_else(|| PathBuf::from(".painel"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Simple dirs implementation for the local data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
