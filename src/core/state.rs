//! Record of the last completed selection.
//!
//! After a successful `select` or `resolve` the CLI writes a [`LastSelection`]
//! so `version-selector last` can print it later. Records are kept per API: the
//! directory name is the md5 of the base URL.
//!
//! # Layout
//! `<cache dir>/version-selector/<md5(api_base_url)>/last.json`

use crate::core::dirs::get_cache_directory;
use crate::core::error::{Result, SelectorError};
use crate::core::path::SelectionPath;
use crate::core::response::ResolvedSelection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LAST_FILE: &str = "last.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSelection {
    pub api_base_url: String,
    pub path: SelectionPath,
    pub resolved: ResolvedSelection,
    pub resolved_at: DateTime<Utc>,
}

impl LastSelection {
    pub fn new(api_base_url: impl Into<String>, path: SelectionPath, resolved: ResolvedSelection) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            path,
            resolved,
            resolved_at: Utc::now(),
        }
    }
}

pub fn state_dir_for(cache_home: &Path, api_base_url: &str) -> PathBuf {
    let api_hash = format!("{:x}", md5::compute(api_base_url.as_bytes()));
    cache_home.join(api_hash)
}

pub fn save_last_selection(selection: &LastSelection) -> Result<PathBuf> {
    save_last_selection_in(&get_cache_directory()?, selection)
}

pub fn load_last_selection(api_base_url: &str) -> Result<LastSelection> {
    load_last_selection_in(&get_cache_directory()?, api_base_url)
}

pub fn save_last_selection_in(cache_home: &Path, selection: &LastSelection) -> Result<PathBuf> {
    let dir = state_dir_for(cache_home, &selection.api_base_url);
    log::debug!("Saving last selection under {}", dir.display());

    fs::create_dir_all(&dir).map_err(|e| {
        log::error!("Failed to create state directory '{}': {}", dir.display(), e);
        SelectorError::directory_creation_failed(&dir, e)
    })?;

    let file = dir.join(LAST_FILE);
    let json = serde_json::to_string_pretty(selection)?;
    fs::write(&file, json).map_err(|e| {
        log::error!("Failed to write state file '{}': {}", file.display(), e);
        SelectorError::write_failed(&file, e)
    })?;

    Ok(file)
}

pub fn load_last_selection_in(cache_home: &Path, api_base_url: &str) -> Result<LastSelection> {
    let file = state_dir_for(cache_home, api_base_url).join(LAST_FILE);
    log::debug!("Looking for last selection at {}", file.display());

    if !file.exists() {
        return Err(SelectorError::NoLastSelection);
    }

    let content = fs::read_to_string(&file).map_err(|e| SelectorError::read_failed(&file, e))?;
    serde_json::from_str(&content).map_err(|e| {
        log::error!("Failed to parse state file '{}': {}", file.display(), e);
        SelectorError::parse_failed(&file, e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::response::LevelResponse;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample(api: &str) -> LastSelection {
        let resolved = LevelResponse::from_value("/game-versions", json!({"platform": "paper", "version": "1.21"}))
            .ok()
            .and_then(|r| r.as_resolved().cloned())
            .expect("resolved payload");
        LastSelection::new(api, SelectionPath::from_segments(["paper", "1.21"]), resolved)
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let selection = sample("http://localhost:8080");

        let file = save_last_selection_in(temp_dir.path(), &selection)?;
        assert!(file.ends_with(LAST_FILE));

        let loaded = load_last_selection_in(temp_dir.path(), "http://localhost:8080")?;
        assert_eq!(loaded, selection);
        Ok(())
    }

    #[test]
    fn test_selections_are_kept_per_api() -> Result<()> {
        let temp_dir = TempDir::new()?;
        save_last_selection_in(temp_dir.path(), &sample("http://a.test"))?;

        let err = load_last_selection_in(temp_dir.path(), "http://b.test").unwrap_err();
        assert!(matches!(err, SelectorError::NoLastSelection));
        Ok(())
    }

    #[test]
    fn test_state_dir_is_stable() {
        let home = PathBuf::from("/cache/version-selector");
        assert_eq!(
            state_dir_for(&home, "http://localhost:8080"),
            state_dir_for(&home, "http://localhost:8080")
        );
        assert_ne!(
            state_dir_for(&home, "http://localhost:8080"),
            state_dir_for(&home, "http://localhost:8081")
        );
    }

    #[test]
    fn test_load_corrupt_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let dir = state_dir_for(temp_dir.path(), "http://a.test");
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(LAST_FILE), "not json")?;

        let err = load_last_selection_in(temp_dir.path(), "http://a.test").unwrap_err();
        assert!(matches!(err, SelectorError::ParseFailed { .. }));
        Ok(())
    }
}
