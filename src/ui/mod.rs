//! Presentation boundary.
//!
//! Rendering itself happens outside this crate. The controllers describe what
//! should change as [`Action`](crate::app::Action)s; the [`Session`](crate::Session)
//! replays them onto a [`View`] implementation, which never touches the
//! application state.
//!
//! ```text
//! Event → handle_event → Vec<Action> → Session → View
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data computed from entities

pub mod viewmodel;

pub use viewmodel::{
    format_count, ingredient_lines, limit_title, Container, IngredientLine, LikeCard, ResultCard,
    ResultsPage, TITLE_LIMIT,
};

use crate::domain::{ListItem, Recipe};

/// Rendering surface driven by the controllers.
///
/// Each method corresponds to one [`Action`](crate::app::Action) variant.
pub trait View {
    /// Shows a loading indicator in `container`.
    fn render_loader(&mut self, container: Container);

    /// Removes every loading indicator.
    fn clear_loader(&mut self);

    /// Empties the search input.
    fn clear_input(&mut self);

    /// Removes rendered search results and their page buttons.
    fn clear_results(&mut self);

    /// Renders one page of search results.
    fn render_results(&mut self, page: &ResultsPage);

    /// Marks the result card for `id` as the selected one.
    fn highlight_selected(&mut self, id: &str);

    /// Removes the rendered recipe.
    fn clear_recipe(&mut self);

    /// Renders a recipe with its like button in the given state.
    fn render_recipe(&mut self, recipe: &Recipe, liked: bool);

    /// Refreshes servings and ingredient counts after a servings change.
    fn update_servings_ingredients(&mut self, recipe: &Recipe);

    /// Appends a shopping list item.
    fn render_item(&mut self, item: &ListItem);

    /// Removes the shopping list item `id`.
    fn delete_item(&mut self, id: &str);

    /// Shows the like button as liked or not liked.
    fn toggle_like_btn(&mut self, liked: bool);

    /// Appends a like to the likes panel.
    fn render_like(&mut self, like: &LikeCard);

    /// Removes the like for recipe `id` from the likes panel.
    fn delete_like(&mut self, id: &str);

    /// Shows the likes menu only when `count` is positive.
    fn toggle_like_menu(&mut self, count: usize);

    /// Shows a user-visible error notification.
    fn alert(&mut self, message: &str);
}
