//! Recipe controller: navigation, recipe arrival and servings changes.

use crate::api::RawRecipe;
use crate::app::{Action, AppState};
use crate::domain::{Generation, Recipe, ServingsChange};
use crate::ui::Container;
use crate::worker::FetchRequest;

/// Alert shown when a recipe fetch fails.
pub const RECIPE_FAILED_MESSAGE: &str = "Error processing recipe!";

/// Replaces the active recipe with `recipe_id` and requests its data.
///
/// An empty id (a bare location without fragment) is ignored.
pub fn navigate(state: &mut AppState, recipe_id: &str) -> Vec<Action> {
    if recipe_id.is_empty() {
        tracing::debug!("navigation without recipe id ignored");
        return vec![];
    }

    let mut actions = vec![Action::ClearRecipe, Action::RenderLoader(Container::Recipe)];
    if state.search.is_some() {
        actions.push(Action::HighlightSelected(recipe_id.to_string()));
    }

    let generation = state.next_generation();
    state.recipe = Some(Recipe::new(recipe_id, generation));
    tracing::debug!(recipe_id = %recipe_id, generation = %generation, "recipe requested");

    actions.push(Action::Fetch(FetchRequest::recipe(generation, recipe_id)));
    actions
}

/// Returns the active recipe if it was issued as `generation`.
fn active_recipe(state: &mut AppState, generation: Generation) -> Option<&mut Recipe> {
    match state.recipe.as_mut() {
        Some(recipe) if recipe.generation == generation => Some(recipe),
        Some(recipe) => {
            tracing::debug!(
                response = %generation,
                active = %recipe.generation,
                recipe_id = %recipe.id,
                "stale recipe response discarded"
            );
            None
        }
        None => {
            tracing::debug!(response = %generation, "recipe response without active recipe discarded");
            None
        }
    }
}

/// Loads fetched data into the active recipe and renders it.
pub fn recipe_arrived(state: &mut AppState, generation: Generation, raw: &RawRecipe) -> Vec<Action> {
    let default_servings = state.settings.default_servings;
    let Some(recipe) = active_recipe(state, generation) else {
        return vec![];
    };

    recipe.load(raw.clone());
    recipe.parse_ingredients();
    recipe.calc_time();
    recipe.calc_servings(default_servings);
    tracing::debug!(
        recipe_id = %recipe.id,
        ingredients = recipe.ingredients.len(),
        servings = recipe.servings,
        "recipe loaded"
    );

    let snapshot = Box::new(recipe.clone());
    let liked = state.is_liked(&snapshot.id);

    vec![
        Action::ClearLoader,
        Action::RenderRecipe {
            recipe: snapshot,
            liked,
        },
    ]
}

/// Reports a failed recipe fetch. The loader is always cleared.
pub fn recipe_failed(state: &mut AppState, generation: Generation, message: &str) -> Vec<Action> {
    if active_recipe(state, generation).is_none() {
        return vec![];
    }
    tracing::warn!(error = %message, "recipe fetch failed");

    vec![Action::Alert(RECIPE_FAILED_MESSAGE.to_string()), Action::ClearLoader]
}

/// Changes servings by one and rescales the ingredients.
///
/// Ignored without a loaded recipe, and when decreasing from one serving.
pub fn update_servings(state: &mut AppState, change: ServingsChange) -> Vec<Action> {
    let Some(recipe) = state.loaded_recipe_mut() else {
        tracing::debug!(change = ?change, "servings change without loaded recipe ignored");
        return vec![];
    };

    if !recipe.update_servings(change) {
        tracing::debug!(servings = recipe.servings, "servings change refused");
        return vec![];
    }

    vec![Action::UpdateServingsIngredients(Box::new(recipe.clone()))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Likes;

    fn raw(id: &str) -> RawRecipe {
        RawRecipe {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            publisher: "Kitchen".to_string(),
            image_url: String::new(),
            source_url: String::new(),
            ingredients: vec![
                "2 cups flour".to_string(),
                "1 tsp salt".to_string(),
                "1/2 cup water".to_string(),
                "3 eggs".to_string(),
            ],
            servings: None,
            cooking_time: None,
        }
    }

    fn request_generation(actions: &[Action]) -> Generation {
        actions
            .iter()
            .find_map(|a| match a {
                Action::Fetch(request) => Some(request.generation()),
                _ => None,
            })
            .unwrap()
    }

    fn loaded_state(id: &str) -> AppState {
        let mut state = AppState::default();
        let generation = request_generation(&navigate(&mut state, id));
        recipe_arrived(&mut state, generation, &raw(id));
        state
    }

    #[test]
    fn test_navigate_emits_in_order() {
        let mut state = AppState::default();
        let actions = navigate(&mut state, "47746");

        assert_eq!(actions[0], Action::ClearRecipe);
        assert_eq!(actions[1], Action::RenderLoader(Container::Recipe));
        assert!(matches!(&actions[2], Action::Fetch(FetchRequest::Recipe { id, .. }) if id == "47746"));
        assert_eq!(actions.len(), 3);
    }

    #[test]
    fn test_navigate_highlights_when_search_exists() {
        let mut state = AppState::default();
        let generation = state.next_generation();
        state.search = Some(crate::domain::Search::new("pizza", generation));

        let actions = navigate(&mut state, "47746");
        assert_eq!(actions[2], Action::HighlightSelected("47746".to_string()));
    }

    #[test]
    fn test_empty_id_is_ignored() {
        let mut state = AppState::default();
        assert!(navigate(&mut state, "").is_empty());
        assert!(state.recipe.is_none());
    }

    #[test]
    fn test_recipe_arrival_derives_fields() {
        let state = loaded_state("1");
        let recipe = state.loaded_recipe().unwrap();

        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.time, 30);
        assert_eq!(recipe.ingredients[0].unit, "cup");
        assert_eq!(recipe.ingredients[3].unit, "");
        assert_eq!(recipe.ingredients[3].count, Some(3.0));
    }

    #[test]
    fn test_liked_defaults_to_false_without_likes() {
        let mut state = AppState::default();
        let generation = request_generation(&navigate(&mut state, "1"));
        let actions = recipe_arrived(&mut state, generation, &raw("1"));

        assert_eq!(actions[0], Action::ClearLoader);
        assert!(matches!(&actions[1], Action::RenderRecipe { liked: false, .. }));
    }

    #[test]
    fn test_liked_reflects_membership() {
        let mut state = AppState::default();
        let mut likes = Likes::new();
        likes.add_like("1", "Recipe 1", "Kitchen", "");
        state.likes = Some(likes);

        let generation = request_generation(&navigate(&mut state, "1"));
        let actions = recipe_arrived(&mut state, generation, &raw("1"));
        assert!(matches!(&actions[1], Action::RenderRecipe { liked: true, .. }));
    }

    #[test]
    fn test_late_response_does_not_overwrite_newer_recipe() {
        let mut state = AppState::default();
        let slow = request_generation(&navigate(&mut state, "999"));
        let fast = request_generation(&navigate(&mut state, "123"));

        recipe_arrived(&mut state, fast, &raw("123"));
        let late = recipe_arrived(&mut state, slow, &raw("999"));

        assert!(late.is_empty());
        let recipe = state.loaded_recipe().unwrap();
        assert_eq!(recipe.id, "123");
        assert_eq!(recipe.title, "Recipe 123");
    }

    #[test]
    fn test_failure_alerts_and_clears_loader() {
        let mut state = AppState::default();
        let generation = request_generation(&navigate(&mut state, "1"));

        let actions = recipe_failed(&mut state, generation, "404");
        assert_eq!(
            actions,
            vec![Action::Alert(RECIPE_FAILED_MESSAGE.to_string()), Action::ClearLoader]
        );
        assert!(state.loaded_recipe().is_none());
    }

    #[test]
    fn test_servings_round_trip() {
        let mut state = loaded_state("1");
        let before: Vec<_> = state.loaded_recipe().unwrap().ingredients.clone();

        assert_eq!(update_servings(&mut state, ServingsChange::Increase).len(), 1);
        assert_eq!(state.loaded_recipe().unwrap().servings, 5);
        assert_eq!(update_servings(&mut state, ServingsChange::Decrease).len(), 1);

        let after = &state.loaded_recipe().unwrap().ingredients;
        for (b, a) in before.iter().zip(after) {
            let (b, a) = (b.count.unwrap(), a.count.unwrap());
            assert!((b - a).abs() < 1e-9);
        }
    }

    #[test]
    fn test_decrease_refused_at_one_serving() {
        let mut state = loaded_state("1");
        while state.loaded_recipe().unwrap().servings > 1 {
            update_servings(&mut state, ServingsChange::Decrease);
        }

        assert!(update_servings(&mut state, ServingsChange::Decrease).is_empty());
        assert_eq!(state.loaded_recipe().unwrap().servings, 1);
    }

    #[test]
    fn test_servings_without_recipe_is_noop() {
        let mut state = AppState::default();
        assert!(update_servings(&mut state, ServingsChange::Increase).is_empty());

        navigate(&mut state, "1");
        assert!(update_servings(&mut state, ServingsChange::Increase).is_empty());
    }
}
