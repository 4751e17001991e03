//! Project configuration (identicon.yaml).
//!
//! Every field is optional; command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IdenticonError, Result};
use crate::types::Settings;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "identicon.yaml";

/// Configuration loaded from identicon.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Total image size in pixels.
    pub size: u16,

    /// Render corners (and possibly the center) in the code's second colour.
    pub two_color: bool,

    /// Opacity of every fill colour.
    pub alpha: u8,

    /// Output directory for rendered files.
    pub output: PathBuf,

    /// Port the HTTP service listens on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            size: 1024,
            two_color: settings.two_color,
            alpha: settings.alpha,
            output: PathBuf::from("dist"),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IdenticonError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // an empty document is not a mapping, treat it as all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| IdenticonError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!(
                "Check {} syntax; known keys are size, two_color, alpha, output, port",
                CONFIG_FILE
            )),
        })
    }

    /// Load an explicit config file, or `identicon.yaml` in `dir` if it
    /// exists, or fall back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = dir.join(CONFIG_FILE);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Render settings described by this configuration.
    pub fn settings(&self) -> Settings {
        Settings {
            two_color: self.two_color,
            alpha: self.alpha,
        }
    }
}
