use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable consulted before the on-disk config.
pub const TOKEN_ENV: &str = "AVWX_TOKEN";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// token = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// AVWX account token used as the bearer credential on every request.
    pub token: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("rest", "avwx", "avwx-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set/replace the stored token.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Token from the config file, if present and non-blank.
    pub fn stored_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Token to authenticate with: the environment variable wins over the
    /// config file so a stored token can be overridden per invocation.
    pub fn resolve_token(&self) -> Option<String> {
        if let Ok(token) = env::var(TOKEN_ENV) {
            let token = token.trim();
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }

        self.stored_token().map(str::to_string)
    }

    pub fn is_configured(&self) -> bool {
        self.stored_token().is_some()
    }
}
