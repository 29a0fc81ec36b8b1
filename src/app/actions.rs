//! Actions representing side effects requested by the controllers.
//!
//! This module defines the [`Action`] type: the commands a controller returns
//! after processing an event. Most actions are view updates; [`Action::Fetch`]
//! hands a request to the worker and is how a controller suspends until data
//! arrives.
//!
//! Actions carry the data they need (a computed results page, a recipe snapshot,
//! an item) so they can be asserted on directly and replayed without access to
//! the application state.
//!
//! # Example
//!
//! ```rust
//! use recipebox::app::Action;
//! use recipebox::ui::Container;
//!
//! let actions = vec![Action::ClearResults, Action::RenderLoader(Container::SearchResults)];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::{Like, ListItem, Recipe};
use crate::ui::{Container, LikeCard, ResultsPage, View};
use crate::worker::FetchRequest;

/// Commands emitted by the controllers, executed in order by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Empty the search input.
    ClearInput,

    /// Remove rendered search results.
    ClearResults,

    /// Show a loading indicator.
    RenderLoader(Container),

    /// Remove every loading indicator.
    ClearLoader,

    /// Render one page of search results.
    RenderResults(ResultsPage),

    /// Mark a result card as selected.
    HighlightSelected(String),

    /// Remove the rendered recipe.
    ClearRecipe,

    /// Render a recipe.
    RenderRecipe {
        /// Snapshot of the recipe at render time.
        recipe: Box<Recipe>,
        /// Whether the recipe is in the likes collection.
        liked: bool,
    },

    /// Refresh servings and ingredient counts.
    UpdateServingsIngredients(Box<Recipe>),

    /// Append a shopping list item.
    RenderItem(ListItem),

    /// Remove a shopping list item by id.
    DeleteItem(String),

    /// Set the like button state.
    ToggleLikeBtn(bool),

    /// Append a like to the likes panel.
    RenderLike(Like),

    /// Remove a like from the likes panel by recipe id.
    DeleteLike(String),

    /// Show or hide the likes menu for this many likes.
    ToggleLikeMenu(usize),

    /// Show a user-visible error.
    Alert(String),

    /// Hand a request to the fetch worker.
    Fetch(FetchRequest),
}

impl Action {
    /// Replays a view action onto `view`.
    ///
    /// Returns the request of an [`Action::Fetch`], which is not a view concern.
    /// Likes are rendered as [`LikeCard`]s timed against the current clock.
    pub fn apply_to(self, view: &mut dyn View) -> Option<FetchRequest> {
        match self {
            Self::ClearInput => view.clear_input(),
            Self::ClearResults => view.clear_results(),
            Self::RenderLoader(container) => view.render_loader(container),
            Self::ClearLoader => view.clear_loader(),
            Self::RenderResults(page) => view.render_results(&page),
            Self::HighlightSelected(id) => view.highlight_selected(&id),
            Self::ClearRecipe => view.clear_recipe(),
            Self::RenderRecipe { recipe, liked } => view.render_recipe(&recipe, liked),
            Self::UpdateServingsIngredients(recipe) => view.update_servings_ingredients(&recipe),
            Self::RenderItem(item) => view.render_item(&item),
            Self::DeleteItem(id) => view.delete_item(&id),
            Self::ToggleLikeBtn(liked) => view.toggle_like_btn(liked),
            Self::RenderLike(like) => view.render_like(&LikeCard::new(&like, chrono::Utc::now())),
            Self::DeleteLike(id) => view.delete_like(&id),
            Self::ToggleLikeMenu(count) => view.toggle_like_menu(count),
            Self::Alert(message) => view.alert(&message),
            Self::Fetch(request) => return Some(request),
        }
        None
    }
}
