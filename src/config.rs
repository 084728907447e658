//! Configuration management for the CX ticketing client.
//!
//! Handles loading configuration from JSONC files and applying the
//! environment and command line overrides for the API location.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Environment variable that overrides `api_url`.
pub const API_URL_ENV: &str = "CX_API_URL";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the ticketing API
    pub api_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// How long the success notification stays visible, in seconds
    pub notification_secs: u64,
    /// Log file path (relative to config dir or absolute)
    pub log_path: String,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
            notification_secs: 5,
            log_path: "cx-tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/cx-tui/config.jsonc`
    /// 3. `~/.config/cx-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Apply the API url overrides.
    ///
    /// # Arguments
    /// * `env_url` - Value of `CX_API_URL`, if set
    /// * `cli_url` - Value of `--api-url`, if given
    ///
    /// # Details
    /// The command line wins over the environment, which wins over the file.
    /// Blank values are ignored.
    pub fn with_api_url_overrides(mut self, env_url: Option<String>, cli_url: Option<String>) -> Self {
        for url in [env_url, cli_url].into_iter().flatten() {
            if !url.trim().is_empty() {
                self.api_url = url.trim().to_string();
            }
        }
        self
    }

    /// Parse and validate the API base url.
    ///
    /// # Returns
    /// * `Result<Url>` - Absolute http(s) url or error
    pub fn api_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_url)
            .with_context(|| format!("Invalid api_url: {}", self.api_url))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(anyhow::anyhow!(
                "api_url must be an http(s) url, got: {}",
                self.api_url
            ));
        }

        Ok(url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to config file or error
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("cx-tui").join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to log file or error
    ///
    /// # Details
    /// If log_path is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_path);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            let config_dir = config_dir()
                .ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
            Ok(config_dir.join("cx-tui").join(&self.log_path))
        }
    }
}

/// Strip `//` comments from JSONC content.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(strip_comment)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut a line at the first `//` that is not inside a string literal.
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;
    let mut prev_slash = false;

    for (i, ch) in line.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                prev_slash = false;
            }
            '/' if prev_slash => return line[..i - 1].trim_end(),
            '/' => prev_slash = true,
            _ => prev_slash = false,
        }
    }

    line
}
