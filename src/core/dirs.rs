//! Per-user directories for the config file and the selection state.

use crate::core::error::SelectorError;
use std::path::PathBuf;

const APP_DIR: &str = "version-selector";

#[derive(Debug, Clone, Copy)]
enum DirKind {
    Config,
    Cache,
}

impl DirKind {
    fn xdg_var(self) -> &'static str {
        match self {
            DirKind::Config => "XDG_CONFIG_HOME",
            DirKind::Cache => "XDG_CACHE_HOME",
        }
    }

    fn home_relative(self) -> &'static str {
        match (self, std::env::consts::OS) {
            (DirKind::Config, "macos") => "Library/Application Support",
            (DirKind::Cache, "macos") => "Library/Caches",
            (DirKind::Config, _) => ".config",
            (DirKind::Cache, _) => ".cache",
        }
    }

    fn platform_default(self) -> Option<PathBuf> {
        match self {
            DirKind::Config => dirs::config_dir(),
            DirKind::Cache => dirs::cache_dir(),
        }
    }
}

fn app_directory(kind: DirKind) -> Result<PathBuf, SelectorError> {
    // An explicit XDG variable wins everywhere, including macOS.
    if let Some(dir) = std::env::var_os(kind.xdg_var()).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir).join(APP_DIR));
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" | "macos" => {
            dirs::home_dir().unwrap_or_default().join(kind.home_relative())
        }
        _ => kind.platform_default().unwrap_or_default(),
    };

    Ok(base.join(APP_DIR))
}

pub fn get_config_directory() -> Result<PathBuf, SelectorError> {
    app_directory(DirKind::Config)
}

pub fn get_cache_directory() -> Result<PathBuf, SelectorError> {
    app_directory(DirKind::Cache)
}
