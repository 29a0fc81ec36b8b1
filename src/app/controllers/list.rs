//! Shopping list controller.

use crate::app::{Action, AppState};
use crate::domain::ShoppingList;

/// Adds every ingredient of the loaded recipe to the shopping list.
///
/// The list is created on first use. Ingredients without a count are added as one.
pub fn add_recipe(state: &mut AppState) -> Vec<Action> {
    let Some(recipe) = state.loaded_recipe() else {
        tracing::debug!("add to list without loaded recipe ignored");
        return vec![];
    };
    let ingredients = recipe.ingredients.clone();

    let list = state.list.get_or_insert_with(ShoppingList::new);
    let actions: Vec<Action> = ingredients
        .into_iter()
        .map(|i| Action::RenderItem(list.add_item(i.count.unwrap_or(1.0), i.unit, i.ingredient)))
        .collect();

    tracing::debug!(added = actions.len(), total = list.len(), "ingredients added to list");
    actions
}

/// Removes the item `item_id`. Unknown ids are ignored.
pub fn delete_item(state: &mut AppState, item_id: &str) -> Vec<Action> {
    let Some(list) = state.list.as_mut() else {
        tracing::debug!(item_id = %item_id, "delete without list ignored");
        return vec![];
    };

    match list.delete_item(item_id) {
        Ok(item) => vec![Action::DeleteItem(item.id)],
        Err(e) => {
            tracing::debug!(error = %e, "delete of unknown item ignored");
            vec![]
        }
    }
}

/// Overwrites the count of `item_id` with the number typed in `value`.
///
/// Values that are not finite numbers and unknown ids are ignored. The view
/// already shows the typed value, so nothing is emitted.
pub fn update_count(state: &mut AppState, item_id: &str, value: &str) -> Vec<Action> {
    let Some(count) = value.trim().parse::<f64>().ok().filter(|c| c.is_finite()) else {
        tracing::debug!(item_id = %item_id, value = %value, "unparsable count ignored");
        return vec![];
    };

    let Some(list) = state.list.as_mut() else {
        tracing::debug!(item_id = %item_id, "count update without list ignored");
        return vec![];
    };

    if let Err(e) = list.update_count(item_id, count) {
        tracing::debug!(error = %e, "count update of unknown item ignored");
    }
    vec![]
}
