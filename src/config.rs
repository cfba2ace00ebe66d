//! Configuration file support for wheelpick.
//!
//! Configuration is loaded from `~/.config/wheelpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/wheelpick/config.toml
//! item_height = 36
//! height = 216
//! cell_height = 12
//! first_year = 1970
//! last_year = 2050
//! ```

use std::path::PathBuf;

use chrono::Datelike;
use serde::Deserialize;

use crate::error::PickerResult;
use crate::picker::{ColumnMetrics, DEFAULT_HEIGHT, DEFAULT_ITEM_HEIGHT};

/// Pixels covered by one terminal row
pub const DEFAULT_CELL_HEIGHT: f64 = 12.0;

/// Years shown on either side of the current year by default
const DEFAULT_YEAR_SPAN: i32 = 50;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Height of one option, in pixels
    pub item_height: Option<f64>,

    /// Height of the picker, in pixels
    pub height: Option<f64>,

    /// Pixels per terminal row
    pub cell_height: Option<f64>,

    /// First year offered by the date picker
    pub first_year: Option<i32>,

    /// Last year offered by the date picker
    pub last_year: Option<i32>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wheelpick")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, item_height: Option<f64>, height: Option<f64>) -> Self {
        if item_height.is_some() {
            self.item_height = item_height;
        }
        if height.is_some() {
            self.height = height;
        }
        self
    }

    /// Item height, falling back to environment variable or default.
    pub fn item_height(&self) -> f64 {
        self.item_height
            .or_else(|| env_f64("WHEELPICK_ITEM_HEIGHT"))
            .unwrap_or(DEFAULT_ITEM_HEIGHT)
    }

    /// Picker height, falling back to environment variable or default.
    pub fn height(&self) -> f64 {
        self.height
            .or_else(|| env_f64("WHEELPICK_HEIGHT"))
            .unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(DEFAULT_CELL_HEIGHT)
    }

    /// Validated column metrics.
    pub fn metrics(&self) -> PickerResult<ColumnMetrics> {
        ColumnMetrics::new(self.item_height(), self.height())
    }

    /// Year range for the date picker, ordered.
    pub fn year_range(&self) -> (i32, i32) {
        let current = chrono::Local::now().year();
        let first = self.first_year.unwrap_or(current - DEFAULT_YEAR_SPAN);
        let last = self.last_year.unwrap_or(current + DEFAULT_YEAR_SPAN);
        (first.min(last), first.max(last))
    }
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
