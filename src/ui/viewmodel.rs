//! View model types representing renderable UI state.
//!
//! View models are computed from entity state by the controllers and handed to
//! the [`View`](super::View). They contain no business logic, only display-ready
//! data: the current results page with its navigation buttons, shortened
//! titles and formatted ingredient counts.

use chrono::{DateTime, Utc};

use crate::api::RecipeSummary;
use crate::domain::{Like, Recipe};

/// Maximum title length on a result card before it is shortened.
pub const TITLE_LIMIT: usize = 17;

/// Denominators tried when formatting a count as a fraction.
const FRACTION_DENOMINATORS: [u32; 9] = [2, 3, 4, 5, 6, 8, 10, 12, 16];

/// Largest difference accepted between a count and its fraction form.
const FRACTION_TOLERANCE: f64 = 0.01;

/// Region of the page a loading indicator is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The search results column.
    SearchResults,
    /// The recipe detail pane.
    Recipe,
}

/// One search result as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    /// Recipe id, the link target.
    pub id: String,
    /// Title shortened to [`TITLE_LIMIT`].
    pub title: String,
    /// Publisher name.
    pub publisher: String,
    /// Thumbnail URL.
    pub image_url: String,
}

impl From<&RecipeSummary> for ResultCard {
    fn from(summary: &RecipeSummary) -> Self {
        Self {
            id: summary.id.clone(),
            title: limit_title(&summary.title, TITLE_LIMIT),
            publisher: summary.publisher.clone(),
            image_url: summary.image_url.clone(),
        }
    }
}

/// A window of search results plus its navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPage {
    /// One-based page number.
    pub page: usize,
    /// Number of pages, zero for an empty result list.
    pub total_pages: usize,
    /// Cards on this page.
    pub items: Vec<ResultCard>,
    /// Target of the "previous page" button, if shown.
    pub prev: Option<usize>,
    /// Target of the "next page" button, if shown.
    pub next: Option<usize>,
}

impl ResultsPage {
    /// Slices `results` to `page`, or `None` when the page does not exist.
    ///
    /// Page 1 of an empty result list exists and is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipebox::api::RecipeSummary;
    /// use recipebox::ui::ResultsPage;
    ///
    /// let results: Vec<RecipeSummary> = (1..=12)
    ///     .map(|i| RecipeSummary {
    ///         id: i.to_string(),
    ///         title: format!("Pizza {i}"),
    ///         publisher: String::new(),
    ///         image_url: String::new(),
    ///     })
    ///     .collect();
    ///
    /// let page = ResultsPage::compute(&results, 2, 10).unwrap();
    /// assert_eq!(page.items.len(), 2);
    /// assert_eq!(page.prev, Some(1));
    /// assert_eq!(page.next, None);
    /// ```
    #[must_use]
    pub fn compute(results: &[RecipeSummary], page: usize, per_page: usize) -> Option<Self> {
        let per_page = per_page.max(1);
        let total_pages = (results.len() + per_page - 1) / per_page;

        if page < 1 || page > total_pages.max(1) {
            return None;
        }

        let start = (page - 1) * per_page;
        let end = (start + per_page).min(results.len());
        let items = results[start..end].iter().map(ResultCard::from).collect();

        let prev = (page > 1).then(|| page - 1);
        let next = (page < total_pages).then(|| page + 1);

        Some(Self {
            page,
            total_pages,
            items,
            prev,
            next,
        })
    }
}

/// Shortens `title` to whole words fitting in `limit` characters, appending ` ...`.
///
/// Word lengths are accumulated without the separating spaces.
#[must_use]
pub fn limit_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }

    let mut kept = Vec::new();
    let mut acc = 0;
    for word in title.split(' ') {
        let len = word.chars().count();
        if acc + len <= limit {
            kept.push(word);
        }
        acc += len;
    }
    format!("{} ...", kept.join(" "))
}

/// Formats an ingredient count for display.
///
/// Counts are rounded to four decimals, then shown as a whole number, a
/// fraction or a mixed number when a common kitchen denominator is close
/// enough, else with up to two decimals. A negative count carries one leading
/// `-`. A missing count is shown as `?`.
///
/// # Examples
///
/// ```
/// use recipebox::ui::format_count;
///
/// assert_eq!(format_count(Some(2.5)), "2 1/2");
/// assert_eq!(format_count(Some(1.0 / 3.0)), "1/3");
/// assert_eq!(format_count(Some(4.0)), "4");
/// assert_eq!(format_count(None), "?");
/// ```
#[must_use]
pub fn format_count(count: Option<f64>) -> String {
    let Some(count) = count.filter(|c| c.is_finite()) else {
        return "?".to_string();
    };
    if count < 0.0 {
        let magnitude = format_count(Some(-count));
        return if magnitude == "0" { magnitude } else { format!("-{magnitude}") };
    }

    let rounded = (count * 10_000.0).round() / 10_000.0;
    #[allow(clippy::cast_possible_truncation)]
    let mut whole = rounded.trunc() as i64;
    let frac = rounded - rounded.trunc();

    if frac.abs() < f64::EPSILON {
        return whole.to_string();
    }

    for denominator in FRACTION_DENOMINATORS {
        let d = f64::from(denominator);
        let numerator = (frac * d).round();
        if (frac - numerator / d).abs() < FRACTION_TOLERANCE {
            #[allow(clippy::cast_possible_truncation)]
            let numerator = numerator as i64;
            if numerator == 0 {
                return whole.to_string();
            }
            if numerator == i64::from(denominator) {
                whole += 1;
                return whole.to_string();
            }
            return if whole == 0 {
                format!("{numerator}/{denominator}")
            } else {
                format!("{whole} {numerator}/{denominator}")
            };
        }
    }

    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// An ingredient with its count formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    /// Count as produced by [`format_count`].
    pub count: String,
    /// Short unit, empty when the line has none.
    pub unit: String,
    /// Ingredient text.
    pub ingredient: String,
}

/// Formats every ingredient of `recipe` at its current servings.
///
/// Views call this from [`View::render_recipe`](super::View::render_recipe) and
/// [`View::update_servings_ingredients`](super::View::update_servings_ingredients).
#[must_use]
pub fn ingredient_lines(recipe: &Recipe) -> Vec<IngredientLine> {
    recipe
        .ingredients
        .iter()
        .map(|i| IngredientLine {
            count: format_count(i.count),
            unit: i.unit.clone(),
            ingredient: i.ingredient.clone(),
        })
        .collect()
}

/// One entry of the likes panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeCard {
    /// Recipe id, the link target.
    pub id: String,
    /// Title shortened to [`TITLE_LIMIT`].
    pub title: String,
    /// Publisher name.
    pub author: String,
    /// Thumbnail URL.
    pub img: String,
    /// How long ago the recipe was liked, absent for likes stored without a time.
    pub liked_ago: Option<String>,
}

impl LikeCard {
    /// Builds the card for `like` as seen at `now`.
    #[must_use]
    pub fn new(like: &Like, now: DateTime<Utc>) -> Self {
        Self {
            id: like.id.clone(),
            title: limit_title(&like.title, TITLE_LIMIT),
            author: like.author.clone(),
            img: like.img.clone(),
            liked_ago: liked_ago(like.liked_at, now),
        }
    }
}

/// Describes the time elapsed since `liked_at` in the largest whole unit.
fn liked_ago(liked_at: i64, now: DateTime<Utc>) -> Option<String> {
    if liked_at <= 0 {
        return None;
    }
    let elapsed = now.signed_duration_since(DateTime::<Utc>::from_timestamp(liked_at, 0)?);

    let text = if elapsed.num_days() > 0 {
        format!("{}d ago", elapsed.num_days())
    } else if elapsed.num_hours() > 0 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_minutes() > 0 {
        format!("{}m ago", elapsed.num_minutes())
    } else {
        "just now".to_string()
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(n: usize) -> Vec<RecipeSummary> {
        (1..=n)
            .map(|i| RecipeSummary {
                id: i.to_string(),
                title: format!("Recipe {i}"),
                publisher: "P".to_string(),
                image_url: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_first_page_of_many_has_only_next() {
        let page = ResultsPage::compute(&summaries(30), 1, 10).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.prev, None);
        assert_eq!(page.next, Some(2));
        assert_eq!(page.items.first().map(|c| c.id.as_str()), Some("1"));
    }

    #[test]
    fn test_middle_page_has_both_buttons() {
        let page = ResultsPage::compute(&summaries(30), 2, 10).unwrap();
        assert_eq!(page.prev, Some(1));
        assert_eq!(page.next, Some(3));
        assert_eq!(page.items.first().map(|c| c.id.as_str()), Some("11"));
    }

    #[test]
    fn test_single_page_has_no_buttons() {
        let page = ResultsPage::compute(&summaries(4), 1, 10).unwrap();
        assert_eq!(page.prev, None);
        assert_eq!(page.next, None);
        assert_eq!(page.items.len(), 4);
    }

    #[test]
    fn test_out_of_range_pages() {
        assert!(ResultsPage::compute(&summaries(12), 0, 10).is_none());
        assert!(ResultsPage::compute(&summaries(12), 3, 10).is_none());

        let empty = ResultsPage::compute(&[], 1, 10).unwrap();
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_pages, 0);
        assert!(ResultsPage::compute(&[], 2, 10).is_none());
    }

    #[test]
    fn test_limit_title() {
        assert_eq!(limit_title("Pasta with tomato and spinach", 17), "Pasta with tomato ...");
        assert_eq!(limit_title("Short title", 17), "Short title");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(1.875)), "1 7/8");
        assert_eq!(format_count(Some(0.4)), "2/5");
        assert_eq!(format_count(Some(2.999_99)), "3");
        assert_eq!(format_count(Some(1.234_56)), "1.23");
        assert_eq!(format_count(Some(f64::NAN)), "?");
    }

    #[test]
    fn test_negative_counts_keep_one_sign() {
        assert_eq!(format_count(Some(-2.5)), "-2 1/2");
        assert_eq!(format_count(Some(-0.25)), "-1/4");
        assert_eq!(format_count(Some(-3.0)), "-3");
        assert_eq!(format_count(Some(-0.000_01)), "0");
    }

    #[test]
    fn test_ingredient_lines_follow_servings() {
        use crate::api::RawRecipe;
        use crate::domain::Generation;

        let mut recipe = Recipe::new("1", Generation::new(1));
        recipe.load(RawRecipe {
            id: "1".to_string(),
            title: "Bread".to_string(),
            publisher: String::new(),
            image_url: String::new(),
            source_url: String::new(),
            ingredients: vec!["1 1/2 cups flour".to_string(), "salt".to_string()],
            servings: Some(2),
            cooking_time: None,
        });
        recipe.parse_ingredients();
        recipe.calc_servings(4);

        let lines = ingredient_lines(&recipe);
        assert_eq!(
            lines[0],
            IngredientLine {
                count: "1 1/2".to_string(),
                unit: "cup".to_string(),
                ingredient: "flour".to_string(),
            }
        );
        assert_eq!(lines[1].count, "1");
        assert_eq!(lines[1].unit, "");

        recipe.scale_to(3);
        assert_eq!(ingredient_lines(&recipe)[0].count, "2 1/4");
    }

    #[test]
    fn test_like_card() {
        let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let mut like = Like {
            id: "47746".to_string(),
            title: "Pasta with tomato and spinach".to_string(),
            author: "Closet Cooking".to_string(),
            img: "p.jpg".to_string(),
            liked_at: 1_700_000_000 - 30,
        };

        let card = LikeCard::new(&like, now);
        assert_eq!(card.title, "Pasta with tomato ...");
        assert_eq!(card.liked_ago.as_deref(), Some("just now"));

        like.liked_at = 1_700_000_000 - 300;
        assert_eq!(LikeCard::new(&like, now).liked_ago.as_deref(), Some("5m ago"));
        like.liked_at = 1_700_000_000 - 3 * 3600;
        assert_eq!(LikeCard::new(&like, now).liked_ago.as_deref(), Some("3h ago"));
        like.liked_at = 1_700_000_000 - 7 * 86_400;
        assert_eq!(LikeCard::new(&like, now).liked_ago.as_deref(), Some("7d ago"));

        like.liked_at = 0;
        assert_eq!(LikeCard::new(&like, now).liked_ago, None);
    }
}
