//! Common assertion helpers for test output validation
//!
//! Provides predicates for the numbered option lists, resolved summaries and
//! error messages printed by version-selector.

#![allow(dead_code)]

use predicates::prelude::*;

/// Checks for a numbered option line such as `[2] vanilla`
pub fn has_option(index: usize, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}] {name}"))
}

/// Checks for the resolved summary line
pub fn resolved_as(summary: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Resolved: {summary}"))
}

/// Checks for an error banner carrying `message`
pub fn error_with(message: &str) -> impl Predicate<str> {
    predicates::str::contains("Error:").and(predicates::str::contains(message.to_string()))
}
