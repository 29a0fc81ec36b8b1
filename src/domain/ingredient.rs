//! Ingredient line parsing.
//!
//! Recipe sources deliver ingredients as free text ("1 1/2 cups flour (sifted)").
//! [`Ingredient::parse`] turns one such line into a structured
//! `{count, unit, ingredient}` record:
//!
//! 1. The line is lowercased, parenthesised remarks are dropped and whitespace
//!    is collapsed.
//! 2. Long unit names are normalized to the short vocabulary
//!    (`tablespoons` → `tbsp`, `ounces` → `oz`, `teaspoons` → `tsp`,
//!    `cups` → `cup`, `pounds` → `pound`).
//! 3. If a recognised unit appears and every token before it is a quantity, the
//!    quantities form the count (absent when the unit is the first token), the
//!    unit is kept and the remaining tokens form the ingredient.
//! 4. Otherwise leading quantity tokens form the count with an empty unit.
//! 5. A line without any quantity counts as one unit of the whole text.
//!
//! # Quantities
//!
//! - integers and decimals: `2`, `0.5`
//! - fractions: `1/2`, and unicode vulgar fractions, alone or glued to a whole
//!   number: `½`, `1½`
//! - mixed numbers are summed: `1 1/2` → 1.5
//! - ranges take the upper bound: `1-2` → 2
//! - a hyphenated pair whose right side is smaller than its left side is a mixed
//!   number: `1-1/2` → 1.5

use serde::{Deserialize, Serialize};

/// Long unit spellings and their short forms.
const UNITS_LONG: [(&str, &str); 8] = [
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

/// Units recognised after normalization.
const UNITS: [&str; 7] = ["tbsp", "oz", "tsp", "cup", "pound", "kg", "g"];

/// A parsed ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Quantity in `unit`s, `None` when the line names a unit without a number.
    pub count: Option<f64>,
    /// Short unit name, empty for unitless ingredients.
    pub unit: String,
    /// Remaining free text.
    pub ingredient: String,
}

impl Ingredient {
    /// Parses one raw ingredient line.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipebox::domain::Ingredient;
    ///
    /// let parsed = Ingredient::parse("1 1/2 Tablespoons olive oil (extra virgin)");
    /// assert_eq!(parsed.count, Some(1.5));
    /// assert_eq!(parsed.unit, "tbsp");
    /// assert_eq!(parsed.ingredient, "olive oil");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let cleaned = strip_parentheses(&lowered);
        let tokens: Vec<String> = cleaned.split_whitespace().map(normalize_unit).collect();

        if let Some(unit_index) = tokens.iter().position(|t| UNITS.contains(&t.as_str())) {
            let quantities: Option<Vec<f64>> = tokens[..unit_index]
                .iter()
                .map(|t| parse_quantity(t))
                .collect();

            if let Some(quantities) = quantities {
                let count = if quantities.is_empty() {
                    None
                } else {
                    Some(quantities.iter().sum())
                };
                return Self {
                    count,
                    unit: tokens[unit_index].clone(),
                    ingredient: tokens[unit_index + 1..].join(" "),
                };
            }
        }

        let leading: Vec<f64> = tokens.iter().map_while(|t| parse_quantity(t)).collect();
        if leading.is_empty() {
            Self {
                count: Some(1.0),
                unit: String::new(),
                ingredient: tokens.join(" "),
            }
        } else {
            Self {
                count: Some(leading.iter().sum()),
                unit: String::new(),
                ingredient: tokens[leading.len()..].join(" "),
            }
        }
    }

    /// Multiplies the count by `ratio`, leaving an absent count absent.
    pub fn scale(&mut self, ratio: f64) {
        if let Some(count) = self.count.as_mut() {
            *count *= ratio;
        }
    }
}

/// Replaces every `( ... )` segment with a single space.
///
/// An opening parenthesis without a closing one is kept as text.
fn strip_parentheses(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push(' ');
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}

/// Maps a token to its short unit form when it is a unit, else returns it unchanged.
fn normalize_unit(token: &str) -> String {
    let bare = token.trim_end_matches(['.', ',']);

    if let Some((_, short)) = UNITS_LONG.iter().find(|(long, _)| *long == bare) {
        return (*short).to_string();
    }
    if UNITS.contains(&bare) {
        return bare.to_string();
    }
    token.to_string()
}

/// Parses a single quantity token, see the module docs for the accepted forms.
#[must_use]
pub fn parse_quantity(token: &str) -> Option<f64> {
    if let Some((left, right)) = token.split_once('-') {
        let low = parse_simple(left)?;
        let high = parse_simple(right)?;
        return Some(if high < low { low + high } else { high });
    }
    parse_simple(token)
}

fn parse_simple(token: &str) -> Option<f64> {
    if token.is_empty() {
        return None;
    }

    if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator = parse_decimal(numerator)?;
        let denominator = parse_decimal(denominator)?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    let mut chars = token.chars();
    if let Some(last) = chars.next_back() {
        if let Some(fraction) = vulgar_fraction(last) {
            let whole = chars.as_str();
            return if whole.is_empty() {
                Some(fraction)
            } else {
                parse_decimal(whole).map(|w| w + fraction)
            };
        }
    }

    parse_decimal(token)
}

/// Parses plain digits with an optional decimal point, rejecting `inf`, `nan` and signs.
fn parse_decimal(token: &str) -> Option<f64> {
    let valid = !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.chars().any(|c| c.is_ascii_digit());
    if !valid {
        return None;
    }
    token.parse::<f64>().ok()
}

fn vulgar_fraction(c: char) -> Option<f64> {
    let value = match c {
        '½' => 1.0 / 2.0,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '¼' => 1.0 / 4.0,
        '¾' => 3.0 / 4.0,
        '⅕' => 1.0 / 5.0,
        '⅖' => 2.0 / 5.0,
        '⅗' => 3.0 / 5.0,
        '⅘' => 4.0 / 5.0,
        '⅙' => 1.0 / 6.0,
        '⅚' => 5.0 / 6.0,
        '⅛' => 1.0 / 8.0,
        '⅜' => 3.0 / 8.0,
        '⅝' => 5.0 / 8.0,
        '⅞' => 7.0 / 8.0,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("count should be present");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_long_units_are_normalized() {
        let parsed = Ingredient::parse("4 Ounces cream cheese");
        assert_close(parsed.count, 4.0);
        assert_eq!(parsed.unit, "oz");
        assert_eq!(parsed.ingredient, "cream cheese");

        assert_eq!(Ingredient::parse("2 teaspoons salt").unit, "tsp");
        assert_eq!(Ingredient::parse("3 cups water").unit, "cup");
        assert_eq!(Ingredient::parse("1 pounds beef").unit, "pound");
        assert_eq!(Ingredient::parse("1 tablespoon sugar").unit, "tbsp");
    }

    #[test]
    fn test_parentheses_are_removed() {
        let parsed = Ingredient::parse("1 (8 oz) package cream cheese (softened)");
        assert_close(parsed.count, 1.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.ingredient, "package cream cheese");
    }

    #[test]
    fn test_mixed_number_before_unit() {
        let parsed = Ingredient::parse("1 1/2 cups flour");
        assert_close(parsed.count, 1.5);
        assert_eq!(parsed.unit, "cup");
        assert_eq!(parsed.ingredient, "flour");
    }

    #[test]
    fn test_range_takes_upper_bound() {
        let parsed = Ingredient::parse("1-2 tbsp honey");
        assert_close(parsed.count, 2.0);
        assert_eq!(parsed.unit, "tbsp");
    }

    #[test]
    fn test_hyphenated_mixed_number() {
        let parsed = Ingredient::parse("1-1/3 cup milk");
        assert_close(parsed.count, 1.0 + 1.0 / 3.0);
    }

    #[test]
    fn test_unicode_fractions() {
        assert_close(Ingredient::parse("½ cup sugar").count, 0.5);
        assert_close(Ingredient::parse("1½ cups sugar").count, 1.5);
        assert_close(Ingredient::parse("2 ¾ oz chocolate").count, 2.75);
    }

    #[test]
    fn test_unit_without_number_has_no_count() {
        let parsed = Ingredient::parse("cup of coffee");
        assert_eq!(parsed.count, None);
        assert_eq!(parsed.unit, "cup");
        assert_eq!(parsed.ingredient, "of coffee");
    }

    #[test]
    fn test_unitless_with_number() {
        let parsed = Ingredient::parse("3 eggs");
        assert_close(parsed.count, 3.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.ingredient, "eggs");
    }

    #[test]
    fn test_no_quantity_counts_as_one() {
        let parsed = Ingredient::parse("Salt and pepper to taste");
        assert_close(parsed.count, 1.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.ingredient, "salt and pepper to taste");
    }

    #[test]
    fn test_words_before_unit_fall_back_to_leading_quantity() {
        let parsed = Ingredient::parse("2 large cups spinach");
        assert_close(parsed.count, 2.0);
        assert_eq!(parsed.unit, "");
        assert_eq!(parsed.ingredient, "large cup spinach");
    }

    #[test]
    fn test_unit_with_trailing_period() {
        let parsed = Ingredient::parse("2 tbsp. butter");
        assert_eq!(parsed.unit, "tbsp");
        assert_eq!(parsed.ingredient, "butter");
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("1/0"), None);
        assert_eq!(parse_quantity("-2"), None);
        assert_eq!(parse_quantity("inf"), None);
        assert_eq!(parse_quantity("."), None);
    }

    #[test]
    fn test_scale_leaves_missing_count_alone() {
        let mut missing = Ingredient::parse("cup of coffee");
        missing.scale(2.0);
        assert_eq!(missing.count, None);

        let mut present = Ingredient::parse("3 eggs");
        present.scale(2.0);
        assert_close(present.count, 6.0);
    }
}
