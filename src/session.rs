//! Runtime driving events through the handler and onto a view.
//!
//! A [`Session`] owns everything one open page needs: the state, the view, the
//! likes storage, the fetch worker and the queue of fetches still in flight.
//! Fetches are not resolved while an event is handled; they wait in the queue
//! until [`run_pending`](Session::run_pending) or [`run_fetch`](Session::run_fetch)
//! completes them, so any completion order can be reproduced.

use std::collections::VecDeque;

use crate::app::{handle_event, AppState, Event};
use crate::domain::error::Result;
use crate::infrastructure::storage_path;
use crate::storage::{JsonFileStorage, Storage};
use crate::ui::View;
use crate::wiring::{translate, BrowserEvent};
use crate::worker::{FetchRequest, RecipeWorker};
use crate::{initialize, Config};

/// One page's worth of application runtime.
pub struct Session<V: View> {
    state: AppState,
    view: V,
    storage: Box<dyn Storage>,
    worker: RecipeWorker,
    pending: VecDeque<FetchRequest>,
}

impl<V: View> Session<V> {
    /// Creates a session with no pending fetches.
    pub fn new(state: AppState, view: V, storage: Box<dyn Storage>, worker: RecipeWorker) -> Self {
        Self {
            state,
            view,
            storage,
            worker,
            pending: VecDeque::new(),
        }
    }

    /// Creates a session backed by the storage file and the HTTP client
    /// configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::Io`](crate::RecipeBoxError::Io) if the data
    /// directory cannot be created.
    pub fn from_config(config: &Config, view: V) -> Result<Self> {
        let storage = JsonFileStorage::new(storage_path(config))?;
        tracing::debug!(path = %storage.path().display(), "storage opened");

        Ok(Self::new(
            initialize(config),
            view,
            Box::new(storage),
            RecipeWorker::from_config(config),
        ))
    }

    /// Handles `event`, applies the resulting view actions and queues fetches.
    pub fn dispatch(&mut self, event: &Event) {
        let actions = handle_event(&mut self.state, self.storage.as_mut(), event);
        for action in actions {
            if let Some(request) = action.apply_to(&mut self.view) {
                tracing::debug!(generation = %request.generation(), "fetch queued");
                self.pending.push_back(request);
            }
        }
    }

    /// Translates a browser occurrence and dispatches the resulting events.
    pub fn dispatch_browser(&mut self, event: &BrowserEvent) {
        for event in translate(event) {
            self.dispatch(&event);
        }
    }

    /// Resolves queued fetches in order until the queue is empty.
    ///
    /// Fetches queued by continuations are resolved too. Returns how many ran.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Some(request) = self.pending.pop_front() {
            self.resolve(&request);
            ran += 1;
        }
        ran
    }

    /// Resolves the queued fetch at `position` only, leaving the others queued.
    ///
    /// Returns `false` when there is no fetch at that position.
    pub fn run_fetch(&mut self, position: usize) -> bool {
        let Some(request) = self.pending.remove(position) else {
            return false;
        };
        self.resolve(&request);
        true
    }

    fn resolve(&mut self, request: &FetchRequest) {
        let response = self.worker.handle_message(request);
        self.dispatch(&Event::Fetched(response));
    }

    /// Fetches waiting to be resolved, oldest first.
    pub fn pending_fetches(&self) -> impl Iterator<Item = &FetchRequest> {
        self.pending.iter()
    }

    /// The application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The likes storage.
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }
}

impl<V: View + std::fmt::Debug> std::fmt::Debug for Session<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("view", &self.view)
            .field("worker", &self.worker)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
