//! Configuration handling for shelf
//!
//! Configuration is read from `shelf.toml` (project, searched upward from the
//! working directory) and `~/.config/shelf/config.toml` (global). Project
//! values win over global ones; command-line flags win over both.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::format::{Item as FormatItem, StrftimeItems};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::DEFAULT_DATE_FORMAT;

/// File name of the project configuration
pub const PROJECT_CONFIG_FILE: &str = "shelf.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// chrono format string for member join dates
    pub date_format: Option<String>,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// Seed file to build the library from, relative to the project root
    pub seed: Option<PathBuf>,

    /// Overrides the global date format
    pub date_format: Option<String>,
}

/// Checks that `format` is a non-empty chrono format string.
///
/// chrono only reports a bad specifier when the date is printed, and printing
/// then fails, so formats are checked when the config is read.
pub fn validate_date_format(format: &str) -> Result<(), ConfigError> {
    if format.is_empty() {
        return Err(ConfigError::Invalid("date_format must not be empty".to_string()));
    }

    if StrftimeItems::new(format).any(|item| matches!(item, FormatItem::Error)) {
        return Err(ConfigError::Invalid(format!(
            "date_format '{}' is not a valid chrono format",
            format
        )));
    }

    Ok(())
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project_root = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_project_root(&dir));

        let project = match &project_root {
            Some(root) => Self::load_project_config(root)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            project,
            global,
            project_root,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "shelf", "shelf").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        match Self::global_config_dir() {
            Some(dir) => Self::load_global_from(&dir.join("config.toml")),
            None => Ok(GlobalConfig::default()),
        }
    }

    /// Loads global configuration from a specific file; a missing file means defaults
    pub fn load_global_from(config_path: &Path) -> Result<GlobalConfig> {
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        let config: GlobalConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")?;

        if let Some(format) = &config.date_format {
            validate_date_format(format).context("Invalid global config")?;
        }

        Ok(config)
    }

    /// Loads project configuration from a specific root
    pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
        let config_path = project_root.join(PROJECT_CONFIG_FILE);

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        let config: ProjectConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")?;

        if let Some(format) = &config.date_format {
            validate_date_format(format).context("Invalid project config")?;
        }

        Ok(config)
    }

    /// Finds the nearest ancestor of `start` (inclusive) holding `shelf.toml`
    pub fn find_project_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_CONFIG_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Effective date format: project, then global, then the built-in default
    pub fn date_format(&self) -> &str {
        self.project
            .date_format
            .as_deref()
            .or(self.global.date_format.as_deref())
            .unwrap_or(DEFAULT_DATE_FORMAT)
    }

    /// Seed file from the project config, resolved against the project root
    pub fn seed_path(&self) -> Option<PathBuf> {
        let seed = self.project.seed.as_ref()?;
        match &self.project_root {
            Some(root) if seed.is_relative() => Some(root.join(seed)),
            _ => Some(seed.clone()),
        }
    }
}
