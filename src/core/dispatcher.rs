//! Runs fetches off the caller's thread and hands completions back as events.
//!
//! Each [`FetchDispatcher::dispatch`] spawns a worker that calls the
//! [`LevelSource`] and sends one [`FetchCompletion`] down a channel. Several
//! fetches can be in flight at once; the selector decides which completion
//! still matters, so the dispatcher never cancels anything.

use crate::core::client::LevelSource;
use crate::core::error::{Result, SelectorError};
use crate::core::path::SelectionPath;
use crate::core::response::LevelResponse;
use crate::core::selector::{FetchKey, FetchOutcome, HierarchicalSelector};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug)]
pub struct FetchCompletion {
    pub key: FetchKey,
    pub result: Result<LevelResponse>,
}

pub struct FetchDispatcher {
    source: Arc<dyn LevelSource>,
    tx: Sender<FetchCompletion>,
    rx: Receiver<FetchCompletion>,
    in_flight: usize,
}

impl FetchDispatcher {
    pub fn new(source: Arc<dyn LevelSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn resource_root(&self) -> &str {
        self.source.resource_root()
    }

    /// Fresh selector rooted at this dispatcher's resource.
    pub fn selector(&self) -> HierarchicalSelector {
        HierarchicalSelector::new(self.source.resource_root())
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, key: FetchKey, path: SelectionPath) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.in_flight += 1;

        thread::spawn(move || {
            // A panicking source still owes the dispatcher a completion.
            let result = panic::catch_unwind(AssertUnwindSafe(|| source.fetch(&path)))
                .unwrap_or_else(|_| {
                    log::error!("Fetch for '{path}' panicked");
                    Err(SelectorError::fetch_failed(path.to_string(), "the level source panicked"))
                });
            if tx.send(FetchCompletion { key, result }).is_err() {
                log::debug!("Dispatcher dropped before fetch for '{path}' completed");
            }
        });
    }

    /// Block until the next completion. `None` when nothing is in flight.
    pub fn recv(&mut self) -> Option<FetchCompletion> {
        if self.in_flight == 0 {
            return None;
        }
        let completion = self.rx.recv().ok()?;
        self.in_flight -= 1;
        Some(completion)
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<FetchCompletion> {
        if self.in_flight == 0 {
            return None;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => {
                self.in_flight -= 1;
                Some(completion)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn try_recv(&mut self) -> Option<FetchCompletion> {
        match self.rx.try_recv() {
            Ok(completion) => {
                self.in_flight -= 1;
                Some(completion)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Request the selector's current path if needed and feed completions
    /// back until that path is no longer pending.
    ///
    /// Returns the outcome for the current path, or `None` when the store
    /// already held its answer.
    pub fn drive(&mut self, selector: &mut HierarchicalSelector) -> Option<FetchOutcome> {
        if let Some(key) = selector.refresh() {
            self.dispatch(key, selector.path().clone());
        }

        let mut last = None;
        while selector.is_pending() {
            let Some(completion) = self.recv() else {
                log::warn!("Current path is pending but no fetch is in flight");
                break;
            };
            let outcome = selector.complete_fetch(completion.key, completion.result);
            if outcome != FetchOutcome::Stale {
                last = Some(outcome);
            }
        }
        last
    }
}
