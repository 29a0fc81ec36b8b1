//! Translation of browser events into application events.
//!
//! The host page forwards raw occurrences (form submit, load, hash change,
//! delegated clicks) as [`BrowserEvent`]s. [`translate`] turns each into the
//! events the controllers understand. Clicks are classified through
//! [`classify`](crate::app::interaction::classify) once per occurrence.

use std::collections::BTreeMap;

use crate::app::interaction::{classify, Interaction, Region};
use crate::app::Event;

/// Raw browser occurrence forwarded by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// The search form was submitted with the input's current text.
    Submit {
        /// Search input value.
        input: String,
    },

    /// The location fragment changed.
    HashChange {
        /// Fragment including the leading `#`, or empty.
        hash: String,
    },

    /// The page finished loading.
    Load {
        /// Fragment at load time, including the leading `#`, or empty.
        hash: String,
    },

    /// A click delegated to one of the listening regions.
    Click {
        /// Region whose listener received the click.
        region: Region,
        /// Class lists of the clicked element, then of each ancestor.
        path: Vec<Vec<String>>,
        /// Data attributes of the closest element carrying them (`goto`, `itemid`).
        dataset: BTreeMap<String, String>,
        /// Current value, when the target is an input.
        value: Option<String>,
    },
}

/// Strips the leading `#` from a location fragment.
#[must_use]
pub fn recipe_id_from_hash(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

/// Maps a browser occurrence to the events it triggers, in dispatch order.
#[must_use]
pub fn translate(event: &BrowserEvent) -> Vec<Event> {
    match event {
        BrowserEvent::Submit { input } => vec![Event::SearchSubmitted { query: input.clone() }],
        BrowserEvent::HashChange { hash } => vec![Event::Navigate {
            recipe_id: recipe_id_from_hash(hash).to_string(),
        }],
        BrowserEvent::Load { hash } => vec![
            Event::RestoreLikes,
            Event::Navigate {
                recipe_id: recipe_id_from_hash(hash).to_string(),
            },
        ],
        BrowserEvent::Click {
            region,
            path,
            dataset,
            value,
        } => {
            let Some(interaction) = classify(*region, path) else {
                tracing::trace!(region = ?region, "unclassified click ignored");
                return vec![];
            };
            click_event(interaction, dataset, value.as_deref()).into_iter().collect()
        }
    }
}

fn click_event(interaction: Interaction, dataset: &BTreeMap<String, String>, value: Option<&str>) -> Option<Event> {
    let event = match interaction {
        Interaction::GoToPage => {
            let page = dataset.get("goto").and_then(|v| v.trim().parse().ok());
            let Some(page) = page else {
                tracing::debug!(dataset = ?dataset, "page button without valid target");
                return None;
            };
            Event::GoToPage { page }
        }
        Interaction::DecreaseServings => Event::DecreaseServings,
        Interaction::IncreaseServings => Event::IncreaseServings,
        Interaction::AddToList => Event::AddToList,
        Interaction::ToggleLike => Event::ToggleLike,
        Interaction::DeleteItem => Event::DeleteItem {
            item_id: dataset.get("itemid")?.clone(),
        },
        Interaction::UpdateCount => Event::UpdateCount {
            item_id: dataset.get("itemid")?.clone(),
            value: value.unwrap_or_default().to_string(),
        },
    };
    Some(event)
}
