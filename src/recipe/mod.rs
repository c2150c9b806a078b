//! The recipe model and the small parsers that build it from user input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Servings used when the input is missing or not a positive integer.
pub const DEFAULT_SERVINGS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// The CSS class carried by the difficulty badge, e.g. `difficulty-easy`.
    pub fn css_class(&self) -> String {
        format!("difficulty-{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}'. Available: easy, medium, hard"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: Option<&str>) -> Self {
        Self {
            name: name.into(),
            amount: amount
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(String::from),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    pub categories: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub directions: Vec<String>,
    pub notes: String,
}

impl Recipe {
    pub fn id(&self) -> String {
        recipe_id(&self.title)
    }
}

/// Derive a URL-safe identifier from a title.
///
/// Lowercases, turns spaces into hyphens and drops everything outside
/// `[a-z0-9-]`. Distinct titles may collide.
pub fn recipe_id(title: &str) -> String {
    title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Parse `name: amount` items separated by `sep`. The amount is optional;
/// blank items are skipped.
pub fn parse_ingredients(input: &str, sep: char) -> Vec<Ingredient> {
    input
        .split(sep)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match item.split_once(':') {
            Some((name, amount)) => Ingredient::new(name.trim(), Some(amount)),
            None => Ingredient::new(item, None),
        })
        .filter(|ingredient| !ingredient.name.is_empty())
        .collect()
}

/// Parse instruction steps separated by `sep`, dropping blank ones.
pub fn parse_directions(input: &str, sep: char) -> Vec<String> {
    input
        .split(sep)
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(String::from)
        .collect()
}

/// Parse comma-separated categories into an ordered set.
pub fn parse_categories(input: &str) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in input.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

/// Lenient servings parse: anything that is not a positive integer becomes
/// [`DEFAULT_SERVINGS`].
pub fn parse_servings(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_SERVINGS,
    }
}

/// `"chocolate-chip-cookies"` -> `"Chocolate Chip Cookies"`.
pub fn title_from_stem(stem: &str) -> String {
    stem.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => format!("{}{}", c.to_uppercase(), chars.as_str().to_lowercase()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
