//! Likes controller: toggling the active recipe and restoring stored likes.

use crate::app::{Action, AppState};
use crate::domain::Likes;
use crate::storage::{load_likes, save_likes, Storage};

/// Likes the loaded recipe, or unlikes it when it is already liked.
///
/// The collection is created on first use and written to `storage` after every
/// change. A failed write is logged and the in-memory change is kept.
pub fn toggle(state: &mut AppState, storage: &mut dyn Storage) -> Vec<Action> {
    let Some(recipe) = state.loaded_recipe() else {
        tracing::debug!("like toggle without loaded recipe ignored");
        return vec![];
    };
    let (id, title, author, img) = (
        recipe.id.clone(),
        recipe.title.clone(),
        recipe.author.clone(),
        recipe.img.clone(),
    );

    let likes = state.likes.get_or_insert_with(Likes::new);

    let mut actions = if likes.is_liked(&id) {
        match likes.delete_like(&id) {
            Ok(_) => vec![Action::ToggleLikeBtn(false), Action::DeleteLike(id.clone())],
            Err(e) => {
                tracing::debug!(error = %e, "unlike failed");
                return vec![];
            }
        }
    } else {
        match likes.add_like(id.clone(), title, author, img) {
            Some(like) => vec![Action::ToggleLikeBtn(true), Action::RenderLike(like)],
            None => return vec![],
        }
    };

    if let Err(e) = save_likes(storage, likes.likes()) {
        tracing::error!(error = %e, "failed to persist likes");
    }
    tracing::debug!(recipe_id = %id, count = likes.num_likes(), "likes updated");

    actions.push(Action::ToggleLikeMenu(likes.num_likes()));
    actions
}

/// Replaces the likes collection with the one held in `storage` and renders it.
pub fn restore(state: &mut AppState, storage: &dyn Storage) -> Vec<Action> {
    let likes = Likes::from_likes(load_likes(storage));
    tracing::debug!(count = likes.num_likes(), "likes restored");

    let mut actions = Vec::with_capacity(likes.num_likes() + 1);
    actions.push(Action::ToggleLikeMenu(likes.num_likes()));
    actions.extend(likes.likes().iter().cloned().map(Action::RenderLike));

    state.likes = Some(likes);
    actions
}
