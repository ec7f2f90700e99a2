//! Shared test utilities for version-selector
//!
//! Integration tests run the real binary and the real HTTP client against a
//! scripted local server, with config and cache directories in temp dirs.

pub mod assertions;
pub mod fixtures;
pub mod sandbox;
pub mod server;
