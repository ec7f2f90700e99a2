//! Core functionality for the version selector.
//!
//! This module provides the selection state machine, the remote level source,
//! configuration and persisted state, input parsing and terminal output.

pub mod choice_parser;
pub mod client;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod dispatcher;
pub mod error;
pub mod level_cache;
pub mod output;
pub mod path;
pub mod response;
pub mod selector;
pub mod state;

// === Error handling ===
pub use error::{Result, SelectorError};

// === Selection model ===
// Path of chosen segments, decoded level responses and the per-level cache
pub use level_cache::LevelCache;
pub use path::SelectionPath;
pub use response::{Game, JavaRuntime, LevelResponse, MinecraftJava, OptionsLevel, ResolvedSelection};

// === Selector state machine ===
// Sans-IO selector: it names fetches, the caller runs them and reports back
pub use selector::{
    FetchKey, FetchOutcome, HierarchicalSelector, LevelView, QueryState, SelectorMode,
};

// === Fetching ===
// Remote source of levels and the thread-backed dispatcher that drives it
pub use client::{HttpLevelSource, LevelSource};
pub use dispatcher::{FetchCompletion, FetchDispatcher};

// === Configuration and persisted state ===
pub use config::{SelectorConfig, API_URL_ENV};
pub use state::LastSelection;

// === Command setup and input ===
pub use choice_parser::{Choice, ChoiceParser};
pub use command_init::{CommandInit, Overrides, SelectorContext};

// === Output formatting ===
pub use output::{
    print_error, print_info, print_levels, print_section_header, print_success, render_levels,
    render_plain, strip_ansi_codes,
};
