//! Recipe entity: raw recipe data plus derived ingredients, time and servings.
//!
//! A [`Recipe`] is created empty for an id taken from the location fragment,
//! filled from a [`RawRecipe`] once its fetch resolves, and then derives its
//! structured ingredients, cooking time and servings. Servings can afterwards be
//! adjusted, rescaling every ingredient count proportionally.

use super::generation::Generation;
use super::ingredient::Ingredient;
use crate::api::RawRecipe;

/// Minutes of cooking time assumed per block of ingredients.
const MINUTES_PER_PERIOD: u32 = 15;

/// Number of ingredients making up one cooking period.
const INGREDIENTS_PER_PERIOD: usize = 3;

/// Direction of a servings adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsChange {
    /// One serving more.
    Increase,
    /// One serving less, refused at one serving.
    Decrease,
}

/// The active recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Recipe id from the location fragment.
    pub id: String,

    /// Generation of this instance; fetch responses for other generations are dropped.
    pub generation: Generation,

    /// Recipe title.
    pub title: String,

    /// Publisher of the recipe.
    pub author: String,

    /// Image URL.
    pub img: String,

    /// Link to the original recipe page.
    pub url: String,

    /// Ingredient lines as delivered by the source.
    pub raw_ingredients: Vec<String>,

    /// Structured ingredients, filled by [`Recipe::parse_ingredients`].
    pub ingredients: Vec<Ingredient>,

    /// Number of servings the ingredient counts are scaled to. Never below one.
    pub servings: u32,

    /// Estimated cooking time in minutes.
    pub time: u32,

    source_servings: Option<u32>,

    source_time: Option<u32>,

    loaded: bool,
}

impl Recipe {
    /// Creates an empty recipe waiting for its fetch.
    #[must_use]
    pub fn new(id: impl Into<String>, generation: Generation) -> Self {
        Self {
            id: id.into(),
            generation,
            title: String::new(),
            author: String::new(),
            img: String::new(),
            url: String::new(),
            raw_ingredients: Vec::new(),
            ingredients: Vec::new(),
            servings: 1,
            time: 0,
            source_servings: None,
            source_time: None,
            loaded: false,
        }
    }

    /// Whether the fetched data has been applied.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Copies the fetched fields into this recipe.
    ///
    /// Derived fields are left untouched; call [`parse_ingredients`](Self::parse_ingredients),
    /// [`calc_time`](Self::calc_time) and [`calc_servings`](Self::calc_servings) afterwards.
    pub fn load(&mut self, raw: RawRecipe) {
        self.title = raw.title;
        self.author = raw.publisher;
        self.img = raw.image_url;
        self.url = raw.source_url;
        self.raw_ingredients = raw.ingredients;
        self.source_servings = raw.servings;
        self.source_time = raw.cooking_time;
        self.loaded = true;
    }

    /// Parses every raw ingredient line into an [`Ingredient`].
    pub fn parse_ingredients(&mut self) {
        self.ingredients = self.raw_ingredients.iter().map(|line| Ingredient::parse(line)).collect();
    }

    /// Sets the cooking time from the source, or 15 minutes per three ingredients.
    pub fn calc_time(&mut self) {
        self.time = self.source_time.unwrap_or_else(|| {
            let periods = (self.raw_ingredients.len() + INGREDIENTS_PER_PERIOD - 1) / INGREDIENTS_PER_PERIOD;
            u32::try_from(periods)
                .unwrap_or(u32::MAX)
                .saturating_mul(MINUTES_PER_PERIOD)
        });
    }

    /// Sets servings from the source, falling back to `default_servings`.
    ///
    /// Zero from either side is lifted to one serving.
    pub fn calc_servings(&mut self, default_servings: u32) {
        self.servings = self
            .source_servings
            .filter(|s| *s >= 1)
            .unwrap_or(default_servings)
            .max(1);
    }

    /// Adjusts servings by one and rescales ingredient counts.
    ///
    /// Returns `false` when the change is refused (decreasing from one serving).
    pub fn update_servings(&mut self, change: ServingsChange) -> bool {
        let new_servings = match change {
            ServingsChange::Increase => self.servings.saturating_add(1),
            ServingsChange::Decrease if self.servings > 1 => self.servings - 1,
            ServingsChange::Decrease => return false,
        };
        self.scale_to(new_servings);
        true
    }

    /// Rescales ingredient counts from the current servings to `new_servings`.
    ///
    /// Requests below one serving are ignored.
    pub fn scale_to(&mut self, new_servings: u32) {
        if new_servings < 1 || new_servings == self.servings {
            return;
        }
        let ratio = f64::from(new_servings) / f64::from(self.servings);
        for ingredient in &mut self.ingredients {
            ingredient.scale(ratio);
        }
        self.servings = new_servings;
    }
}
