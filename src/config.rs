//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Countries offered by the address step when none are configured
pub const DEFAULT_COUNTRIES: [&str; 4] = ["United States", "Canada", "South Africa", "India"];

const DEFAULT_TRANSITION_MS: u64 = 300;
const DEFAULT_TOAST_MS: u64 = 4000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Start in dark mode (defaults to true)
    pub dark_mode: Option<bool>,
    /// Country choices for the address step
    pub countries: Option<Vec<String>>,
    /// Step slide-in duration in milliseconds
    pub transition_ms: Option<u64>,
    /// How long the submission toast stays up, in milliseconds
    pub toast_ms: Option<u64>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "stepform", "stepform-tui")
}

/// Location of the log file, if the platform has a data directory
pub fn log_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("stepform-tui.log"))
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode.unwrap_or(true)
    }

    pub fn countries(&self) -> Vec<String> {
        match &self.countries {
            Some(countries) if !countries.is_empty() => countries.clone(),
            _ => DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms.unwrap_or(DEFAULT_TOAST_MS))
    }
}
