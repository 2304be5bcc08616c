use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::ui::pager::DEFAULT_PAGE_SIZE;
use crate::utils::path::expand_tilde;

/// User settings, read from `~/.bikeshare/bikeshare.conf` (YAML).
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Rows per page in paginated tables
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Print how long each report section took
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_show_timing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            show_timing: default_show_timing(),
        }
    }
}

impl Config {
    /// Return the per-user configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bikeshare")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load the default config file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load an explicit config file; it must exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "config file loaded");
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if self.data_dir.trim().is_empty() {
            return Err(AppError::Config("data_dir must not be empty".into()));
        }
        Ok(())
    }

    /// Data directory with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }
}
