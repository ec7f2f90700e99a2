//! Shared setup for every command that talks to the version API.
//!
//! [`CommandInit::initialize`] resolves the effective configuration, builds
//! the HTTP source and wraps it in a [`FetchDispatcher`]. The resulting
//! [`SelectorContext`] knows how to bring a selector's current level in
//! ([`SelectorContext::load_current`]), how to walk a list of preset segments
//! ([`SelectorContext::walk`]) and how to record a finished selection.
//!
//! # Configuration precedence
//! 1. `--api-url` / `--resource-root` flags
//! 2. `VERSION_SELECTOR_API_URL`
//! 3. the config file
//! 4. built-in defaults

use crate::core::{
    choice_parser::ChoiceParser,
    client::HttpLevelSource,
    config::SelectorConfig,
    dispatcher::FetchDispatcher,
    error::{Result, SelectorError},
    selector::{HierarchicalSelector, QueryState},
    state::{save_last_selection, LastSelection},
};
use std::sync::Arc;

/// Values given on the command line that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub resource_root: Option<String>,
}

pub struct SelectorContext {
    pub config: SelectorConfig,
    pub dispatcher: FetchDispatcher,
}

pub struct CommandInit;

impl CommandInit {
    pub fn initialize(overrides: &Overrides) -> Result<SelectorContext> {
        let config = Self::effective_config(overrides)?;
        log::debug!(
            "Using API {} with resource root {}",
            config.api_base_url,
            config.resource_root
        );

        let source = HttpLevelSource::new(&config)?;
        Ok(SelectorContext {
            config,
            dispatcher: FetchDispatcher::new(Arc::new(source)),
        })
    }

    pub fn effective_config(overrides: &Overrides) -> Result<SelectorConfig> {
        Ok(SelectorConfig::load_or_create()?
            .with_env_overrides()
            .with_overrides(overrides.api_url.clone(), overrides.resource_root.clone()))
    }
}

impl SelectorContext {
    pub fn selector(&self) -> HierarchicalSelector {
        self.dispatcher.selector()
    }

    /// Fetch the selector's current path if needed and wait for it.
    ///
    /// A path whose fetch failed, now or earlier, is reported as `FetchFailed`.
    pub fn load_current(&mut self, selector: &mut HierarchicalSelector) -> Result<()> {
        self.dispatcher.drive(selector);

        match selector.current_state() {
            Some(QueryState::Failed(reason)) => Err(SelectorError::fetch_failed(
                selector.path().to_string(),
                reason.clone(),
            )),
            _ => Ok(()),
        }
    }

    /// Load the root, then apply `segments` one level at a time.
    ///
    /// Each segment is matched against the options of its level, so both the
    /// option text and its 1-based number are accepted.
    pub fn walk(&mut self, selector: &mut HierarchicalSelector, segments: &[String]) -> Result<()> {
        self.load_current(selector)?;

        for segment in segments {
            let level = selector.path().len();
            if selector.resolved().is_some() {
                return Err(SelectorError::extra_segment(
                    selector.path().to_string(),
                    segment,
                ));
            }

            let value = ChoiceParser::resolve_option(segment.trim(), selector.level_options(level))?;
            selector.on_level_change(level, &value)?;
            self.load_current(selector)?;
        }

        Ok(())
    }

    /// Save the resolved selection as the last one for this API.
    ///
    /// Failing to save is logged and otherwise ignored.
    pub fn record(&self, selector: &HierarchicalSelector) {
        let Some(resolved) = selector.resolved() else {
            return;
        };

        let last = LastSelection::new(
            self.config.api_base_url.clone(),
            selector.path().clone(),
            resolved.clone(),
        );
        match save_last_selection(&last) {
            Ok(file) => log::debug!("Saved last selection to {}", file.display()),
            Err(e) => log::warn!("Could not save last selection: {e}"),
        }
    }
}
