//! The ordered list of segment values chosen so far.
//!
//! A [`SelectionPath`] never has gaps: the only ways to change it are
//! [`SelectionPath::truncate`] and [`SelectionPath::replace_from`], and both
//! refuse an index past the end of the path.

use crate::core::error::{Result, SelectorError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionPath {
    segments: Vec<String>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from segments, dropping blank ones.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.trim().is_empty())
            .collect();
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, level: usize) -> Option<&str> {
        self.segments.get(level).map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Discard every choice from `level` onward.
    pub fn truncate(&mut self, level: usize) -> Result<()> {
        if level > self.len() {
            return Err(SelectorError::level_out_of_range(level, self.len()));
        }
        self.segments.truncate(level);
        Ok(())
    }

    /// Keep everything strictly before `level`, then place `value` at `level`.
    pub fn replace_from(&mut self, level: usize, value: impl Into<String>) -> Result<()> {
        self.truncate(level)?;
        self.segments.push(value.into());
        Ok(())
    }

    /// Resource route for this path under `root`, e.g. `/game-versions/paper/1.21`.
    pub fn route(&self, root: &str) -> String {
        let root = root.trim_end_matches('/');
        if self.is_empty() {
            return if root.is_empty() { "/".to_string() } else { root.to_string() };
        }

        let mut route = String::with_capacity(
            root.len() + self.segments.iter().map(|s| s.len() + 1).sum::<usize>(),
        );
        route.push_str(root);
        for segment in &self.segments {
            route.push('/');
            route.push_str(segment);
        }
        route
    }
}

impl fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "/")
        } else {
            write!(f, "{}", self.segments.join("/"))
        }
    }
}
