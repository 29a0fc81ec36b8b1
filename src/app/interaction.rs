//! Classification of delegated clicks.
//!
//! Clicks are delegated to three page regions. The element under the pointer
//! and its ancestors are matched against a static table keyed by CSS class;
//! the first row that matches decides the [`Interaction`].
//!
//! # Example
//!
//! ```rust
//! use recipebox::app::interaction::{classify, Interaction, Region};
//!
//! // An icon inside the "+" button: the button is one level up.
//! let path = vec![vec![], vec!["btn-tiny".to_string(), "btn-increase".to_string()]];
//! assert_eq!(classify(Region::Recipe, &path), Some(Interaction::IncreaseServings));
//! ```

/// Page region a click listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Pagination buttons under the search results.
    ResultsPages,
    /// The recipe detail pane.
    Recipe,
    /// The shopping list.
    Shopping,
}

/// What a click means once classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A page button; the target page is in its `goto` data attribute.
    GoToPage,
    /// The "-" servings button.
    DecreaseServings,
    /// The "+" servings button.
    IncreaseServings,
    /// "Add to shopping list".
    AddToList,
    /// The like button.
    ToggleLike,
    /// A shopping item's delete button.
    DeleteItem,
    /// A shopping item's count input.
    UpdateCount,
}

/// One row of the dispatch table.
struct Rule {
    region: Region,
    class: &'static str,
    /// Whether a click on a descendant of the element also matches.
    descendants: bool,
    interaction: Interaction,
}

const RULES: &[Rule] = &[
    Rule {
        region: Region::ResultsPages,
        class: "btn-inline",
        descendants: true,
        interaction: Interaction::GoToPage,
    },
    Rule {
        region: Region::Recipe,
        class: "btn-decrease",
        descendants: true,
        interaction: Interaction::DecreaseServings,
    },
    Rule {
        region: Region::Recipe,
        class: "btn-increase",
        descendants: true,
        interaction: Interaction::IncreaseServings,
    },
    Rule {
        region: Region::Recipe,
        class: "recipe__btn--add",
        descendants: true,
        interaction: Interaction::AddToList,
    },
    Rule {
        region: Region::Recipe,
        class: "recipe__love",
        descendants: true,
        interaction: Interaction::ToggleLike,
    },
    Rule {
        region: Region::Shopping,
        class: "shopping__delete",
        descendants: true,
        interaction: Interaction::DeleteItem,
    },
    Rule {
        region: Region::Shopping,
        class: "shopping__count-value",
        descendants: false,
        interaction: Interaction::UpdateCount,
    },
];

/// Classifies a click in `region`.
///
/// `path` holds the class lists of the clicked element first, then of each
/// ancestor up to the region root.
#[must_use]
pub fn classify(region: Region, path: &[Vec<String>]) -> Option<Interaction> {
    RULES
        .iter()
        .filter(|rule| rule.region == region)
        .find(|rule| {
            let depth = if rule.descendants { path.len() } else { path.len().min(1) };
            path[..depth]
                .iter()
                .any(|classes| classes.iter().any(|c| c == rule.class))
        })
        .map(|rule| rule.interaction)
}
