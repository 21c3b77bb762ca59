//! Configuration service
//!
//! Settings are stored as JSON in `<config_dir>/customer-form-tui/config.json`.
//! Only presentation settings live here; customer records are never written
//! to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// Environment variable overriding the configured language
pub const LANGUAGE_ENV: &str = "CUSTOMER_FORM_LANG";

/// Application configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    pub language: Language,
}

impl AppConfig {
    /// Apply a language code from the environment, if it names a supported language
    #[must_use]
    pub fn with_language_override(mut self, code: Option<&str>) -> Self {
        if let Some(lang) = code.and_then(Language::from_code) {
            self.language = lang;
        }
        self
    }
}

/// Application directory under the platform config dir
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("customer-form-tui")
}

/// Configuration service trait
pub trait ConfigService {
    /// Load configuration
    fn load(&self) -> Result<AppConfig>;

    /// Save configuration
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Configuration service backed by a JSON file
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// Service for the default config file location
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        log::debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}
