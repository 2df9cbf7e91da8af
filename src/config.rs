//! Configuration handling for the TUI

use crate::state::{EngineOptions, SliderPolicy, ValidationMode};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Whether an out-of-range slider blocks submit ("blocking" or "advisory")
    pub slider_policy: Option<SliderPolicy>,
    /// When edits re-run validation ("on_submit" or "on_change")
    pub validation_mode: Option<ValidationMode>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "formdemo", "formdemo-tui")
}

/// Directory holding the log file
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Write the effective settings to the default location on first run.
    ///
    /// Returns `true` if a file was written.
    pub fn save_if_missing(&self) -> Result<bool> {
        match Self::config_path() {
            Some(path) => self.save_to_if_missing(&path),
            None => Ok(false),
        }
    }

    fn save_to_if_missing(&self, path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        let options = self.engine_options();
        let effective = TuiConfig {
            slider_policy: Some(options.slider_policy),
            validation_mode: Some(options.validation_mode),
        };
        effective.save_to(path)?;
        Ok(true)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Engine options with defaults filled in
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            slider_policy: self.slider_policy.unwrap_or_default(),
            validation_mode: self.validation_mode.unwrap_or_default(),
        }
    }
}
