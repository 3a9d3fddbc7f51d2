//! Application configuration loaded from a TOML file.
//!
//! The config carries the one piece of real input this application has: the
//! target instant, plus cosmetic extras (destination label, theme). A broken
//! or missing file never prevents the display from opening.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::target::CountdownTarget;

/// Built-in fallback target used when no config file exists yet.
const DEFAULT_TARGET: &str = "2025-10-16T13:35:00-04:00";
const DEFAULT_DESTINATION: &str = "Ottawa";
const DEFAULT_TITLE: &str = "Countdown to us";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Target instant as an RFC 3339 timestamp, ideally offset-qualified.
    pub target: String,
    /// Named IANA zone used when `target` carries no offset.
    pub timezone: Option<String>,
    /// Optional destination label shown in the header.
    pub destination: Option<String>,
    /// Heading shown above the rings.
    pub title: String,
    /// "light", "dark" or "system".
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            timezone: None,
            destination: Some(DEFAULT_DESTINATION.to_string()),
            title: DEFAULT_TITLE.to_string(),
            theme: "system".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config from `path`. A missing file is not an error and
    /// yields the built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config)
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to load config: {err:?}, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve the configured target into an immutable countdown target.
    pub fn target(&self) -> CountdownTarget {
        CountdownTarget::parse(
            &self.target,
            self.timezone.as_deref(),
            self.destination.clone(),
        )
    }
}

/// Resolve where the config file lives. Debug builds read from the working
/// directory; release builds use the per-user config directory.
pub fn resolve_config_path() -> PathBuf {
    resolve_app_file("countdown.toml")
}

/// Resolve where the persisted session state lives.
pub fn resolve_session_path() -> PathBuf {
    resolve_app_file("session.json")
}

#[cfg(debug_assertions)]
fn resolve_app_file(name: &str) -> PathBuf {
    PathBuf::from(name)
}

#[cfg(not(debug_assertions))]
fn resolve_app_file(name: &str) -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "KenBoyle", "CountdownRings") {
        proj_dirs.config_dir().join(name)
    } else {
        PathBuf::from(name)
    }
}
