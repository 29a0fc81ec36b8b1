//! Event handling and dispatch to the controllers.
//!
//! This module implements the event handler that receives user interactions,
//! navigation changes and fetch responses, and routes each one to the
//! controller owning the affected entity.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the browser wiring or from the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. A controller mutates `AppState` and builds actions
//! 4. Actions are returned for execution, in order
//!
//! # Event Types
//!
//! - **Search**: `SearchSubmitted`, `GoToPage`
//! - **Recipe**: `Navigate`, `IncreaseServings`, `DecreaseServings`
//! - **Shopping list**: `AddToList`, `DeleteItem`, `UpdateCount`
//! - **Likes**: `ToggleLike`, `RestoreLikes`
//! - **Worker**: `Fetched` with a typed response
//!
//! # Example
//!
//! ```rust
//! use recipebox::app::{handle_event, Action, AppState, Event};
//! use recipebox::storage::MemoryStorage;
//!
//! let mut state = AppState::default();
//! let mut storage = MemoryStorage::new();
//! let actions = handle_event(
//!     &mut state,
//!     &mut storage,
//!     &Event::SearchSubmitted { query: "pizza".to_string() },
//! );
//! assert_eq!(actions[0], Action::ClearInput);
//! ```

use super::controllers::{likes, list, recipe, search};
use crate::app::{Action, AppState};
use crate::domain::ServingsChange;
use crate::storage::Storage;
use crate::worker::FetchResponse;

/// Events triggered by user input, navigation or fetch responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The search form was submitted.
    SearchSubmitted {
        /// Raw input text, trimmed by the controller.
        query: String,
    },

    /// A pagination button was clicked.
    GoToPage {
        /// One-based target page.
        page: usize,
    },

    /// The page loaded or the location fragment changed.
    Navigate {
        /// Fragment without the leading `#`, possibly empty.
        recipe_id: String,
    },

    /// The page loaded; restore likes from storage.
    RestoreLikes,

    /// The "+" servings button was clicked.
    IncreaseServings,

    /// The "-" servings button was clicked.
    DecreaseServings,

    /// "Add to shopping list" was clicked.
    AddToList,

    /// A shopping list delete button was clicked.
    DeleteItem {
        /// Id of the item to remove.
        item_id: String,
    },

    /// A shopping list count input changed.
    UpdateCount {
        /// Id of the item whose count changed.
        item_id: String,
        /// Raw input value.
        value: String,
    },

    /// The like button of the active recipe was clicked.
    ToggleLike,

    /// A fetch issued earlier has completed.
    ///
    /// Applied only when its generation matches the active entity.
    Fetched(FetchResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// `storage` is only touched by the likes events. Unknown ids, stale
/// responses, failed fetches and failed likes writes are handled by the
/// controllers (logged, alerted or ignored), so there is no error to return.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, storage: &mut dyn Storage, event: &Event) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let actions = match event {
        Event::SearchSubmitted { query } => search::submit(state, query),
        Event::GoToPage { page } => search::go_to_page(state, *page),
        Event::Navigate { recipe_id } => recipe::navigate(state, recipe_id),
        Event::RestoreLikes => likes::restore(state, storage),
        Event::IncreaseServings => recipe::update_servings(state, ServingsChange::Increase),
        Event::DecreaseServings => recipe::update_servings(state, ServingsChange::Decrease),
        Event::AddToList => list::add_recipe(state),
        Event::DeleteItem { item_id } => list::delete_item(state, item_id),
        Event::UpdateCount { item_id, value } => list::update_count(state, item_id, value),
        Event::ToggleLike => likes::toggle(state, storage),
        Event::Fetched(response) => {
            tracing::debug!(generation = %response.generation(), "fetch response received");
            match response {
                FetchResponse::SearchResults { generation, recipes } => {
                    search::results_arrived(state, *generation, recipes)
                }
                FetchResponse::SearchFailed { generation, message } => {
                    search::search_failed(state, *generation, message)
                }
                FetchResponse::Recipe { generation, recipe: raw } => {
                    recipe::recipe_arrived(state, *generation, raw)
                }
                FetchResponse::RecipeFailed { generation, message } => {
                    recipe::recipe_failed(state, *generation, message)
                }
            }
        }
    };

    tracing::debug!(action_count = actions.len(), "event handled");
    actions
}
