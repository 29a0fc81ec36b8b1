//! Application state container.
//!
//! [`AppState`] owns the four entities the controllers coordinate. Each has its
//! own lifecycle:
//!
//! - **Search**: replaced by every submitted query
//! - **Recipe**: replaced by every navigation to a recipe id
//! - **List**: created on the first "add to list", then mutated in place
//! - **Likes**: created on page load or on the first like, then mutated in place
//!
//! Search and Recipe carry a [`Generation`] taken from a single counter on the
//! state, so a fetch response can be matched against the entity that issued it.
//!
//! # Example
//!
//! ```rust
//! use recipebox::app::{AppState, Settings};
//!
//! let mut state = AppState::new(Settings::default());
//! let first = state.next_generation();
//! let second = state.next_generation();
//! assert!(second > first);
//! assert!(state.search.is_none());
//! ```

use crate::domain::{Generation, Likes, Recipe, Search, ShoppingList};
use crate::ui::ResultsPage;

/// Tunables read by the controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Search results shown per page, at least one.
    pub results_per_page: usize,

    /// Servings assumed when the source does not report any, at least one.
    pub default_servings: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            results_per_page: 10,
            default_servings: 4,
        }
    }
}

/// Central application state.
///
/// Passed explicitly into the event handler; tests build isolated instances.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The most recent search, if any query was submitted.
    pub search: Option<Search>,

    /// The recipe currently navigated to.
    pub recipe: Option<Recipe>,

    /// The shopping list, absent until something is added.
    pub list: Option<ShoppingList>,

    /// The likes collection, absent until restored or first used.
    pub likes: Option<Likes>,

    /// Controller tunables.
    pub settings: Settings,

    generation: Generation,
}

impl AppState {
    /// Creates an empty state.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self {
            search: None,
            recipe: None,
            list: None,
            likes: None,
            settings,
            generation: Generation::new(0),
        }
    }

    /// Advances the generation counter and returns the new value.
    pub fn next_generation(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.generation
    }

    /// The loaded recipe, ignoring one still waiting for its fetch.
    #[must_use]
    pub fn loaded_recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref().filter(|r| r.is_loaded())
    }

    /// Mutable access to the loaded recipe.
    pub fn loaded_recipe_mut(&mut self) -> Option<&mut Recipe> {
        self.recipe.as_mut().filter(|r| r.is_loaded())
    }

    /// Whether `id` is liked; `false` while the likes collection does not exist.
    #[must_use]
    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.as_ref().is_some_and(|likes| likes.is_liked(id))
    }

    /// Computes `page` of the current search results.
    ///
    /// Returns `None` when there is no search, its results have not arrived or
    /// the page is out of range.
    #[must_use]
    pub fn results_page(&self, page: usize) -> Option<ResultsPage> {
        let results = self.search.as_ref()?.results()?;
        ResultsPage::compute(results, page, self.settings.results_per_page)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
