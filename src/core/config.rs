use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, SelectorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "VERSION_SELECTOR_API_URL";

const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorConfig {
    pub api_base_url: String,
    pub resource_root: String,
    pub refresh_path: String,
    pub timeout_secs: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            resource_root: "/game-versions".to_string(),
            refresh_path: "/auth/refresh".to_string(),
            timeout_secs: 10,
        }
    }
}

impl SelectorConfig {
    pub fn config_file() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE))
    }

    /// Load the user's config file, writing the defaults on first use.
    pub fn load_or_create() -> Result<Self> {
        let config_file = Self::config_file()?;
        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            log::debug!("Creating default config at {}", config_file.display());
            let config = Self::default();
            config.save_to(&config_file)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SelectorError::read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| SelectorError::parse_failed(path, e))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| SelectorError::directory_creation_failed(dir, e))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| SelectorError::write_failed(path, e))?;
        Ok(())
    }

    /// Apply `VERSION_SELECTOR_API_URL` when it is set and not blank.
    pub fn with_env_overrides(self) -> Self {
        let from_env = std::env::var(API_URL_ENV).ok();
        self.with_overrides(from_env, None)
    }

    /// Apply explicit overrides; blank values are ignored.
    pub fn with_overrides(mut self, api_url: Option<String>, resource_root: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        if let Some(root) = resource_root.filter(|r| !r.trim().is_empty()) {
            self.resource_root = normalize_root(&root);
        }
        self
    }
}

fn normalize_root(root: &str) -> String {
    let trimmed = root.trim().trim_matches('/');
    format!("/{trimmed}")
}
