//! Raw recipe form input as submitted by the generator page, the validation
//! API or the CLI, and its conversion into a [`Recipe`].

pub mod validate;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LarderError, Result};
use crate::recipe::{self, Difficulty, Recipe};

pub use validate::{validate, ValidationReport};

/// Fields that must be non-blank before a document is produced, with the
/// label used in messages.
pub const REQUIRED_FIELDS: [(&str, &str); 6] = [
    ("title", "Title"),
    ("description", "Description"),
    ("prep_time", "Prep Time"),
    ("cook_time", "Cook Time"),
    ("ingredients", "Ingredients"),
    ("directions", "Directions"),
];

/// Unparsed form values. Ingredients and directions are one per line,
/// categories are comma-separated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub difficulty: String,
    #[serde(deserialize_with = "string_or_number")]
    pub servings: String,
    pub prep_time: String,
    pub cook_time: String,
    pub categories: String,
    pub ingredients: String,
    pub directions: String,
    pub notes: String,
}

/// A one-line notice shown above the form.
#[derive(Debug, Clone, Serialize)]
pub struct FlashMessage {
    pub category: &'static str,
    pub text: String,
}

impl FlashMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            category: "error",
            text: text.into(),
        }
    }
}

impl RecipeForm {
    /// Build a form from decoded `key=value` pairs, ignoring unknown keys.
    /// Returns the form together with the submitted `action`, if any.
    pub fn from_pairs<K, V, I>(pairs: I) -> (Self, Option<String>)
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut form = RecipeForm::default();
        let mut action = None;
        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "title" => form.title = value,
                "description" => form.description = value,
                "difficulty" => form.difficulty = value,
                "servings" => form.servings = value,
                "prep_time" => form.prep_time = value,
                "cook_time" => form.cook_time = value,
                "categories" => form.categories = value,
                "ingredients" => form.ingredients = value,
                "directions" => form.directions = value,
                "notes" => form.notes = value,
                "action" => action = Some(value),
                other => tracing::debug!("ignoring unknown form field {other}"),
            }
        }
        (form, action)
    }

    /// Look up a field by its form name.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "title" => &self.title,
            "description" => &self.description,
            "difficulty" => &self.difficulty,
            "servings" => &self.servings,
            "prep_time" => &self.prep_time,
            "cook_time" => &self.cook_time,
            "categories" => &self.categories,
            "ingredients" => &self.ingredients,
            "directions" => &self.directions,
            "notes" => &self.notes,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Convert to a [`Recipe`].
    ///
    /// Blank required fields and empty ingredient or step lists are errors.
    /// An unparseable servings count becomes the default and an unknown
    /// difficulty becomes `easy`.
    pub fn to_recipe(&self) -> Result<Recipe> {
        let missing = REQUIRED_FIELDS
            .iter()
            .any(|(name, _)| self.field(name).unwrap_or("").trim().is_empty());
        if missing {
            return Err(LarderError::Recipe(
                "Please fill in all required fields.".into(),
            ));
        }

        let ingredients = recipe::parse_ingredients(&self.ingredients, '\n');
        if ingredients.is_empty() {
            return Err(LarderError::Recipe(
                "Please enter at least one ingredient.".into(),
            ));
        }
        let directions = recipe::parse_directions(&self.directions, '\n');
        if directions.is_empty() {
            return Err(LarderError::Recipe(
                "Please enter at least one instruction step.".into(),
            ));
        }

        let difficulty = self.difficulty.parse::<Difficulty>().unwrap_or_else(|e| {
            tracing::debug!("{e}; using easy");
            Difficulty::Easy
        });

        Ok(Recipe {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            difficulty,
            prep_time: self.prep_time.trim().to_string(),
            cook_time: self.cook_time.trim().to_string(),
            servings: recipe::parse_servings(&self.servings),
            categories: recipe::parse_categories(&self.categories),
            ingredients,
            directions,
            notes: self.notes.trim().to_string(),
        })
    }
}

/// JSON clients send servings either as `"4"` or `4`.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
        Raw::Null(()) => String::new(),
    })
}
