//! Configuration loading
//!
//! Searches the conventional locations and falls back to built-in defaults
//! when nothing usable is found. Load failures are logged, never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};

/// Configuration file loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Candidate config paths, highest priority first.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("termfolio").join("config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".termfolio.toml"));
        }
        paths.push(PathBuf::from("termfolio.toml"));
        paths
    }

    /// Load from the first existing candidate path, or defaults.
    pub fn load() -> Config {
        for path in Self::candidate_paths() {
            if path.exists() {
                match Self::load_from_path(&path) {
                    Ok(config) => {
                        debug!(path = %path.display(), "configuration loaded");
                        return config;
                    }
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "ignoring unusable config file");
                    }
                }
            }
        }
        debug!("no configuration file found, using defaults");
        Config::default()
    }

    /// Load a specific file, propagating failures to the caller.
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path).map_err(|err| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
