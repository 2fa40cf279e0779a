//! Runtime configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields the stock event-page timings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DevdayError, Result};

/// Configuration for the DevDay terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevdayConfig {
    /// Input poll timeout and tick granularity in milliseconds.
    pub frame_interval_ms: u32,
    /// Default per-line delay when playing a banner.
    pub banner_delay_ms: u32,
    /// Default delay between typed fragments.
    pub typing_delay_ms: u32,
    /// Whether the cursor blinks while input is enabled.
    pub cursor_blink: bool,
    /// Whether URLs in output are made clickable.
    pub web_links: bool,
    /// File receiving log output. Logging to stderr would corrupt the screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Default log filter, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Default for DevdayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            banner_delay_ms: 120,
            typing_delay_ms: 200,
            cursor_blink: true,
            web_links: true,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl DevdayConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    ///
    /// Read failures surface as [`DevdayError::Io`]; callers add the path.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the frame loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.frame_interval_ms == 0 {
            return Err(DevdayError::Config(
                "frame_interval_ms must be > 0".to_string(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(DevdayError::Config("log_level must not be empty".to_string()));
        }
        Ok(())
    }
}
