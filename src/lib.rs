//! Version Selector - a CLI and library for drilling down a hierarchical
//! version API one level at a time.
//!
//! Each level of the remote resource either lists the options for the next
//! choice or describes a complete, resolved version. [`HierarchicalSelector`]
//! keeps the chosen path, caches the options of every level and discards
//! responses that arrive for a path the user already left.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The selection state machine and its fetch keys
//! - The HTTP level source and the fetch dispatcher
//! - Configuration and the saved last selection
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Input
    Choice,
    ChoiceParser,

    // Fetching
    FetchCompletion,
    FetchDispatcher,
    FetchKey,
    FetchOutcome,
    HttpLevelSource,
    LevelSource,

    // Selection model
    Game,
    HierarchicalSelector,
    JavaRuntime,
    LevelCache,
    LevelResponse,
    LevelView,
    MinecraftJava,
    OptionsLevel,
    QueryState,
    ResolvedSelection,
    SelectionPath,
    SelectorMode,

    // Configuration and state
    LastSelection,
    SelectorConfig,

    // Error handling
    Result,
    SelectorError,
};
