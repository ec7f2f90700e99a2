//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`SelectorError`] which covers every failure mode of the
//! version selector. It uses `thiserror` for ergonomic error definitions and
//! includes constructor helpers for the common failure scenarios.
//!
//! # Public API
//! - [`SelectorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, SelectorError>`
//!
//! # Error Categories
//! - **Remote resource**: transport errors, HTTP status, expired sessions, malformed payloads
//! - **Selection**: level out of range, unresolved paths
//! - **Choice input**: zero index, out of range, unknown option
//! - **Config/state files**: directory, read, write and parse failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for version-selector
#[derive(Error, Debug)]
pub enum SelectorError {
    // Remote resource errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to '{route}' failed with status {status}")]
    HttpStatus { route: String, status: u16 },

    #[error("Not authorized to access '{route}'. Log in again and retry.")]
    Unauthorized { route: String },

    #[error("Malformed response from '{route}': {reason}")]
    MalformedResponse { route: String, reason: String },

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Could not load options for '{path}': {reason}")]
    FetchFailed { path: String, reason: String },

    // Selection errors
    #[error("Level {level} is out of range (path has {depth} selected levels)")]
    LevelOutOfRange { level: usize, depth: usize },

    #[error("Path '{path}' does not resolve to a version. Next: {message}")]
    Unresolved { path: String, message: String },

    #[error("Path '{path}' already resolves; unexpected segment '{segment}'")]
    ExtraSegment { path: String, segment: String },

    // Choice input errors
    #[error("No choice entered")]
    EmptyChoice,

    #[error("Choice must be positive (got 0)")]
    ZeroChoice,

    #[error("Choice {index} is out of range (1-{max} available)")]
    ChoiceOutOfRange { index: usize, max: usize },

    #[error("No options available at this level")]
    NoOptionsAvailable,

    #[error("Unknown option '{value}'")]
    UnknownOption { value: String },

    #[error("Invalid choice: '{input}'. Use a number, an option name, 'L:V', 'b' or 'q'")]
    InvalidChoice { input: String },

    #[error("Selection canceled")]
    Canceled,

    // Config and state errors
    #[error("No saved selection found. Run 'version-selector select' first.")]
    NoLastSelection,

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse file '{path}': {source}")]
    ParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using SelectorError
pub type Result<T> = std::result::Result<T, SelectorError>;

impl SelectorError {
    /// Create an HTTP status error for a route
    pub fn http_status(route: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            route: route.into(),
            status,
        }
    }

    /// Create an unauthorized error for a route
    pub fn unauthorized(route: impl Into<String>) -> Self {
        Self::Unauthorized {
            route: route.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(route: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            route: route.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid API URL error
    pub fn invalid_api_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidApiUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a fetch failed error for a displayed path
    pub fn fetch_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a level out of range error
    pub fn level_out_of_range(level: usize, depth: usize) -> Self {
        Self::LevelOutOfRange { level, depth }
    }

    /// Create an unresolved path error
    pub fn unresolved(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unresolved {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn extra_segment(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::ExtraSegment {
            path: path.into(),
            segment: segment.into(),
        }
    }

    /// Create a choice out of range error
    pub fn choice_out_of_range(index: usize, max: usize) -> Self {
        Self::ChoiceOutOfRange { index, max }
    }

    /// Create an unknown option error
    pub fn unknown_option(value: impl Into<String>) -> Self {
        Self::UnknownOption {
            value: value.into(),
        }
    }

    /// Create an invalid choice error
    pub fn invalid_choice(input: impl Into<String>) -> Self {
        Self::InvalidChoice {
            input: input.into(),
        }
    }

    pub fn directory_creation_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseFailed {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectorError::Canceled;
        assert_eq!(err.to_string(), "Selection canceled");
    }

    #[test]
    fn test_http_status_error() {
        let err = SelectorError::http_status("/game-versions/paper", 500);
        assert_eq!(
            err.to_string(),
            "Request to '/game-versions/paper' failed with status 500"
        );
    }

    #[test]
    fn test_choice_out_of_range_error() {
        let err = SelectorError::choice_out_of_range(5, 3);
        assert_eq!(err.to_string(), "Choice 5 is out of range (1-3 available)");
    }

    #[test]
    fn test_level_out_of_range_error() {
        let err = SelectorError::level_out_of_range(4, 2);
        assert_eq!(
            err.to_string(),
            "Level 4 is out of range (path has 2 selected levels)"
        );
    }

    #[test]
    fn test_malformed_error() {
        let err = SelectorError::malformed("/game-versions", "expected an object");
        assert!(err.to_string().contains("/game-versions"));
        assert!(err.to_string().contains("expected an object"));
    }

    #[test]
    fn test_unresolved_error() {
        let err = SelectorError::unresolved("paper", "Select Game Version");
        assert!(err.to_string().contains("'paper'"));
        assert!(err.to_string().contains("Select Game Version"));
    }

    #[test]
    fn test_directory_creation_failed() {
        let path = std::path::PathBuf::from("/test/path");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = SelectorError::directory_creation_failed(&path, io_err);
        assert!(err.to_string().contains("/test/path"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_parse_failed() {
        let path = std::path::PathBuf::from("/test/last.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = SelectorError::parse_failed(&path, json_err);
        assert!(err.to_string().contains("/test/last.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }
}
