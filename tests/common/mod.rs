//! Shared fixtures for the scenario tests.

#![allow(dead_code)]

use std::collections::HashMap;

use recipebox::api::{RawRecipe, RecipeSource, RecipeSummary};
use recipebox::domain::{ListItem, Recipe};
use recipebox::ui::{Container, LikeCard, ResultsPage, View};
use recipebox::{RecipeBoxError, Result};

/// View call as observed by [`RecordingView`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    RenderLoader(Container),
    ClearLoader,
    ClearInput,
    ClearResults,
    RenderResults(ResultsPage),
    HighlightSelected(String),
    ClearRecipe,
    RenderRecipe { id: String, title: String, liked: bool },
    UpdateServingsIngredients { servings: u32 },
    RenderItem(ListItem),
    DeleteItem(String),
    ToggleLikeBtn(bool),
    RenderLike(String),
    DeleteLike(String),
    ToggleLikeMenu(usize),
    Alert(String),
}

/// View recording every call in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<Call>,
    pub like_cards: Vec<LikeCard>,
}

impl RecordingView {
    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn alerts(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Alert(_))).count()
    }
}

impl View for RecordingView {
    fn render_loader(&mut self, container: Container) {
        self.calls.push(Call::RenderLoader(container));
    }

    fn clear_loader(&mut self) {
        self.calls.push(Call::ClearLoader);
    }

    fn clear_input(&mut self) {
        self.calls.push(Call::ClearInput);
    }

    fn clear_results(&mut self) {
        self.calls.push(Call::ClearResults);
    }

    fn render_results(&mut self, page: &ResultsPage) {
        self.calls.push(Call::RenderResults(page.clone()));
    }

    fn highlight_selected(&mut self, id: &str) {
        self.calls.push(Call::HighlightSelected(id.to_string()));
    }

    fn clear_recipe(&mut self) {
        self.calls.push(Call::ClearRecipe);
    }

    fn render_recipe(&mut self, recipe: &Recipe, liked: bool) {
        self.calls.push(Call::RenderRecipe {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            liked,
        });
    }

    fn update_servings_ingredients(&mut self, recipe: &Recipe) {
        self.calls.push(Call::UpdateServingsIngredients {
            servings: recipe.servings,
        });
    }

    fn render_item(&mut self, item: &ListItem) {
        self.calls.push(Call::RenderItem(item.clone()));
    }

    fn delete_item(&mut self, id: &str) {
        self.calls.push(Call::DeleteItem(id.to_string()));
    }

    fn toggle_like_btn(&mut self, liked: bool) {
        self.calls.push(Call::ToggleLikeBtn(liked));
    }

    fn render_like(&mut self, like: &LikeCard) {
        self.calls.push(Call::RenderLike(like.id.clone()));
        self.like_cards.push(like.clone());
    }

    fn delete_like(&mut self, id: &str) {
        self.calls.push(Call::DeleteLike(id.to_string()));
    }

    fn toggle_like_menu(&mut self, count: usize) {
        self.calls.push(Call::ToggleLikeMenu(count));
    }

    fn alert(&mut self, message: &str) {
        self.calls.push(Call::Alert(message.to_string()));
    }
}

/// Recipe source answering from fixed tables.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    pub searches: HashMap<String, Vec<RecipeSummary>>,
    pub recipes: HashMap<String, RawRecipe>,
}

impl ScriptedSource {
    pub fn with_search(mut self, query: &str, count: usize) -> Self {
        let results = (1..=count)
            .map(|i| RecipeSummary {
                id: format!("{query}-{i}"),
                title: format!("{query} number {i}"),
                publisher: "Test Kitchen".to_string(),
                image_url: format!("http://img/{query}/{i}.jpg"),
            })
            .collect();
        self.searches.insert(query.to_string(), results);
        self
    }

    pub fn with_recipe(mut self, id: &str, title: &str, ingredients: &[&str]) -> Self {
        self.recipes.insert(
            id.to_string(),
            RawRecipe {
                id: id.to_string(),
                title: title.to_string(),
                publisher: "Test Kitchen".to_string(),
                image_url: format!("http://img/{id}.jpg"),
                source_url: format!("http://recipes/{id}"),
                ingredients: ingredients.iter().map(ToString::to_string).collect(),
                servings: None,
                cooking_time: None,
            },
        );
        self
    }
}

impl RecipeSource for ScriptedSource {
    fn fetch_results(&self, query: &str) -> Result<Vec<RecipeSummary>> {
        self.searches
            .get(query)
            .cloned()
            .ok_or_else(|| RecipeBoxError::Fetch(format!("no results scripted for {query}")))
    }

    fn fetch_recipe(&self, id: &str) -> Result<RawRecipe> {
        self.recipes
            .get(id)
            .cloned()
            .ok_or_else(|| RecipeBoxError::Fetch(format!("no recipe scripted for {id}")))
    }
}
