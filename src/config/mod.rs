// ABOUTME: Configuration management for linkdeck
// Handles backend endpoint settings and UI preferences

#![allow(dead_code)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the backend access token. Checked before
/// the config file so tokens can stay out of dotfiles entirely.
pub const ACCESS_TOKEN_ENV: &str = "LINKDECK_ACCESS_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the dashboard backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Backend access token. `LINKDECK_ACCESS_TOKEN` takes precedence.
    /// This is the dashboard login token, never the Monday.com API token -
    /// the latter is only ever held in memory by an open wizard.
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            access_token: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the access token: environment first, then config file.
    pub fn resolve_access_token(&self) -> Option<String> {
        std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.access_token.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Color theme
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Whether to show the Monday.com connection column in the roster
    #[serde(default = "default_true")]
    pub show_monday_status: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_monday_status: default_true(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let config_paths = Self::get_config_paths();

        let mut config = Self::default();

        // Load each config file and merge
        for path in config_paths {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;

                let file_config: AppConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config from {}", path.display()))?;

                config.merge(file_config);
            }
        }

        Ok(config)
    }

    /// Save configuration to user config directory
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::get_user_config_dir()?;
        fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".linkdeck").join("config.toml"));
        }

        // 2. User config (~/.linkdeck/config/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 3. System config
        paths.push(PathBuf::from("/etc/linkdeck/config.toml"));

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".linkdeck").join("config"))
    }

    /// Merge another config into this one
    fn merge(&mut self, other: AppConfig) {
        // Don't override version
        if other.api.base_url != default_base_url() {
            self.api.base_url = other.api.base_url;
        }
        self.api.timeout_secs = other.api.timeout_secs;
        if other.api.access_token.is_some() {
            self.api.access_token = other.api.access_token;
        }

        if other.ui_preferences.theme != default_theme() {
            self.ui_preferences.theme = other.ui_preferences.theme;
        }
        self.ui_preferences.show_monday_status = other.ui_preferences.show_monday_status;
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            api: ApiConfig::default(),
            ui_preferences: UiPreferences::default(),
        }
    }
}
