//! Cascading multi-level selection over the version resource.
//!
//! [`HierarchicalSelector`] owns the chosen [`SelectionPath`], the per-level
//! [`LevelCache`] and the terminal [`ResolvedSelection`]. It never performs I/O
//! itself: [`HierarchicalSelector::refresh`] names the fetch the caller has to
//! run, and [`HierarchicalSelector::complete_fetch`] feeds the result back in.
//!
//! # Event flow
//! 1. `refresh()` returns the [`FetchKey`] for the current path when nothing is
//!    known about it yet, and marks it pending.
//! 2. The caller fetches and hands the result to `complete_fetch()`.
//! 3. A result whose key no longer matches the current path is stale and is
//!    only remembered in the query store, never applied.
//! 4. `on_level_change()` edits the path, clears the resolved selection and
//!    evicts deeper cache levels. The caller follows it with `refresh()`.
//!
//! Keys that are pending, ready or failed are never fetched again, so a path
//! that failed once is not retried and a path visited before is served from
//! the store.

use crate::core::error::{Result, SelectorError};
use crate::core::level_cache::LevelCache;
use crate::core::path::SelectionPath;
use crate::core::response::{LevelResponse, ResolvedSelection};
use std::collections::HashMap;
use std::fmt;

/// Deduplication key for a fetch: the root plus the segments as chosen.
///
/// Segments stay separate, so `["a/b"]` and `["a", "b"]` never share a key
/// even though their display routes look alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    root: String,
    path: SelectionPath,
}

impl FetchKey {
    pub fn for_path(root: &str, path: &SelectionPath) -> Self {
        Self {
            root: root.to_string(),
            path: path.clone(),
        }
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    /// Human-readable route, for logs only.
    pub fn route(&self) -> String {
        self.path.route(&self.root)
    }
}

impl fmt::Display for FetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    Pending,
    Ready(LevelResponse),
    Failed(String),
}

/// What `complete_fetch` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result belongs to a path the user already left.
    Stale,
    Failed,
    Options { stored: bool },
    Resolved { changed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorMode {
    Root,
    Drilling,
    Resolved,
}

/// Render-ready description of one dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelView<'a> {
    pub index: usize,
    pub selected: Option<&'a str>,
    pub message: &'a str,
    pub options: &'a [String],
}

type ResolutionCallback = Box<dyn FnMut(Option<&ResolvedSelection>)>;

pub struct HierarchicalSelector {
    root: String,
    path: SelectionPath,
    resolved: Option<ResolvedSelection>,
    cache: LevelCache,
    queries: HashMap<FetchKey, QueryState>,
    on_resolution: Option<ResolutionCallback>,
}

impl HierarchicalSelector {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            path: SelectionPath::new(),
            resolved: None,
            cache: LevelCache::new(),
            queries: HashMap::new(),
            on_resolution: None,
        }
    }

    /// Call `callback` each time the resolved selection appears or is cleared.
    pub fn with_resolution_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Option<&ResolvedSelection>) + 'static,
    {
        self.on_resolution = Some(Box::new(callback));
        self
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    pub fn resolved(&self) -> Option<&ResolvedSelection> {
        self.resolved.as_ref()
    }

    pub fn cache(&self) -> &LevelCache {
        &self.cache
    }

    pub fn current_key(&self) -> FetchKey {
        FetchKey::for_path(&self.root, &self.path)
    }

    pub fn current_state(&self) -> Option<&QueryState> {
        self.queries.get(&self.current_key())
    }

    pub fn current_response(&self) -> Option<&LevelResponse> {
        match self.current_state() {
            Some(QueryState::Ready(response)) => Some(response),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.current_state(), Some(QueryState::Pending))
    }

    /// Bring the selector up to date with the query store.
    ///
    /// Returns the key to fetch when the current path has never been requested.
    pub fn refresh(&mut self) -> Option<FetchKey> {
        let key = self.current_key();
        match self.queries.get(&key) {
            Some(QueryState::Ready(response)) => {
                let response = response.clone();
                log::debug!("Reusing stored response for {key}");
                self.apply(response);
                None
            }
            Some(QueryState::Pending) | Some(QueryState::Failed(_)) => None,
            None => {
                log::debug!("Requesting {key}");
                self.queries.insert(key.clone(), QueryState::Pending);
                Some(key)
            }
        }
    }

    /// Record the result of a fetch and apply it if it is for the current path.
    pub fn complete_fetch(&mut self, key: FetchKey, result: Result<LevelResponse>) -> FetchOutcome {
        let state = match &result {
            Ok(response) => QueryState::Ready(response.clone()),
            Err(e) => QueryState::Failed(e.to_string()),
        };
        self.queries.insert(key.clone(), state);

        if key != self.current_key() {
            log::debug!("Discarding stale response for {key}");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(response) => self.apply(response),
            Err(e) => {
                log::warn!("Fetching {key} failed: {e}");
                FetchOutcome::Failed
            }
        }
    }

    fn apply(&mut self, response: LevelResponse) -> FetchOutcome {
        match response {
            LevelResponse::Resolved(resolved) => {
                if self.resolved.is_some() {
                    return FetchOutcome::Resolved { changed: false };
                }
                log::debug!("Path '{}' resolved", self.path);
                self.resolved = Some(resolved);
                self.notify();
                FetchOutcome::Resolved { changed: true }
            }
            LevelResponse::Options(level) => {
                let stored = self.cache.insert_if_absent(self.path.len(), level);
                FetchOutcome::Options { stored }
            }
        }
    }

    /// Handle a new value for the dropdown at `level`.
    ///
    /// A blank value clears that level and everything after it.
    pub fn on_level_change(&mut self, level: usize, value: &str) -> Result<()> {
        if level > self.path.len() {
            return Err(SelectorError::level_out_of_range(level, self.path.len()));
        }

        if self.resolved.take().is_some() {
            self.notify();
        }

        if value.trim().is_empty() {
            self.path.truncate(level)?;
        } else {
            self.path.replace_from(level, value)?;
        }
        self.cache.evict_after(level);

        log::debug!("Level {level} changed, path is now '{}'", self.path);
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_resolution.as_mut() {
            callback(self.resolved.as_ref());
        }
    }

    /// Indices of the dropdowns to show.
    pub fn visible_levels(&self) -> Vec<usize> {
        let mut levels: Vec<usize> = (0..self.path.len()).collect();
        if let Some(LevelResponse::Options(_)) = self.current_response() {
            levels.push(self.path.len());
        }
        levels
    }

    pub fn level_options(&self, level: usize) -> &[String] {
        self.cache.options(level)
    }

    pub fn level_message(&self, level: usize) -> &str {
        self.cache.message(level)
    }

    pub fn levels(&self) -> Vec<LevelView<'_>> {
        self.visible_levels()
            .into_iter()
            .map(|index| LevelView {
                index,
                selected: self.path.get(index),
                message: self.level_message(index),
                options: self.level_options(index),
            })
            .collect()
    }

    pub fn mode(&self) -> SelectorMode {
        match self.current_response() {
            Some(LevelResponse::Resolved(_)) => SelectorMode::Resolved,
            _ if self.path.is_empty() => SelectorMode::Root,
            _ => SelectorMode::Drilling,
        }
    }
}
