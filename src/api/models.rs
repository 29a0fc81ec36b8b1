//! Wire models returned by the recipe source.
//!
//! These mirror the JSON the recipe API produces. They are deliberately separate
//! from the domain entities: a [`RawRecipe`] is what the network hands over, a
//! [`Recipe`](crate::domain::Recipe) is what the controllers derive from it.

use serde::{Deserialize, Serialize};

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe id, used as the location fragment.
    #[serde(rename = "recipe_id", alias = "id")]
    pub id: String,

    /// Recipe title.
    pub title: String,

    /// Publisher name.
    #[serde(default)]
    pub publisher: String,

    /// Thumbnail URL.
    #[serde(default)]
    pub image_url: String,
}

/// Full recipe as fetched, before ingredient parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecipe {
    /// Recipe id.
    #[serde(rename = "recipe_id", alias = "id")]
    pub id: String,

    /// Recipe title.
    pub title: String,

    /// Publisher name.
    #[serde(default)]
    pub publisher: String,

    /// Image URL.
    #[serde(default)]
    pub image_url: String,

    /// Link to the original recipe.
    #[serde(default)]
    pub source_url: String,

    /// Free-text ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Servings, when the source knows them.
    #[serde(default)]
    pub servings: Option<u32>,

    /// Cooking time in minutes, when the source knows it.
    #[serde(default)]
    pub cooking_time: Option<u32>,
}

/// Body of a search response.
///
/// The API answers unknown queries with an `error` member instead of a list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub count: Option<u32>,

    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,

    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a recipe response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeEnvelope {
    #[serde(default)]
    pub recipe: Option<RawRecipe>,

    #[serde(default)]
    pub error: Option<String>,
}
