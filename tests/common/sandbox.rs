//! Isolated config and cache directories for running the binary
//!
//! The binary reads `XDG_CONFIG_HOME` and `XDG_CACHE_HOME`, so pointing them
//! at temporary directories keeps tests away from the user's real files.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use version_selector::core::config::API_URL_ENV;

/// Both directories are removed when the sandbox is dropped.
pub struct Sandbox {
    pub config_home: TempDir,
    pub cache_home: TempDir,
}

impl Sandbox {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            config_home: TempDir::new()?,
            cache_home: TempDir::new()?,
        })
    }

    pub fn config_file(&self) -> std::path::PathBuf {
        self.config_home.path().join("version-selector").join("config.json")
    }

    pub fn cache_dir(&self) -> &Path {
        self.cache_home.path()
    }

    /// The binary with sandboxed directories and no color.
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("version-selector")?;
        cmd.env("XDG_CONFIG_HOME", self.config_home.path())
            .env("XDG_CACHE_HOME", self.cache_home.path())
            .env("NO_COLOR", "1")
            .env_remove(API_URL_ENV);
        Ok(cmd)
    }

    /// The binary pointed at `api_url`.
    pub fn command_for(&self, api_url: &str) -> anyhow::Result<Command> {
        let mut cmd = self.command()?;
        cmd.arg("--api-url").arg(api_url);
        Ok(cmd)
    }
}
