use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::output::CommandOutput;
use crate::recipe;

use super::{RecipeForm, REQUIRED_FIELDS};

static TIME_UNITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\s*(min|hour|hr)").expect("regex for time units"));

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl CommandOutput for ValidationReport {
    fn human_display(&self) -> String {
        let mut lines = vec![if self.valid {
            "Recipe is valid".to_string()
        } else {
            format!(
                "Recipe has {} error{}",
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            )
        }];
        lines.extend(self.errors.iter().map(|e| format!("  error: {e}")));
        lines.extend(self.warnings.iter().map(|w| format!("  warning: {w}")));
        lines.join("\n")
    }
}

/// Check form values without producing a document.
pub fn validate(form: &RecipeForm) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (name, label) in REQUIRED_FIELDS {
        if form.field(name).unwrap_or("").trim().is_empty() {
            errors.push(format!("{label} is required"));
        }
    }

    if !form.ingredients.is_empty() {
        let count = recipe::parse_ingredients(&form.ingredients, '\n').len();
        if count == 0 {
            errors.push("Please enter at least one ingredient".into());
        } else if count < 3 {
            warnings.push("Recipes with fewer than 3 ingredients might be too simple".into());
        }
    }

    if !form.directions.is_empty() {
        let count = recipe::parse_directions(&form.directions, '\n').len();
        if count == 0 {
            errors.push("Please enter at least one instruction step".into());
        } else if count < 3 {
            warnings.push("Consider adding more detailed steps for clarity".into());
        }
    }

    // Blank servings count as zero.
    let servings = match form.servings.trim() {
        "" => "0",
        s => s,
    };
    match servings.parse::<i64>() {
        Ok(n) if n <= 0 => errors.push("Servings must be a positive number".into()),
        Ok(n) if n > 50 => {
            warnings.push("That's a lot of servings! Double-check if this is correct".into())
        }
        Ok(_) => {}
        Err(_) => errors.push("Servings must be a valid number".into()),
    }

    for (value, label) in [(&form.prep_time, "Prep Time"), (&form.cook_time, "Cook Time")] {
        let value = value.trim();
        if !value.is_empty() && !TIME_UNITS.is_match(value) {
            warnings.push(format!(
                "{label} should include units (e.g., '30 mins', '1 hour')"
            ));
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good() -> RecipeForm {
        RecipeForm {
            title: "Chili".into(),
            description: "Hearty".into(),
            difficulty: "medium".into(),
            servings: "6".into(),
            prep_time: "20 mins".into(),
            cook_time: "1 hour".into(),
            categories: "dinner".into(),
            ingredients: "beans: 2 cans\nbeef: 1 lb\nonion: 1".into(),
            directions: "Brown the beef.\nAdd onion.\nSimmer with beans.".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_form_has_no_findings() {
        let report = validate(&good());
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_form_lists_every_required_field() {
        let report = validate(&RecipeForm::default());
        assert!(!report.valid);
        for label in ["Title", "Description", "Prep Time", "Cook Time", "Ingredients", "Directions"] {
            assert!(
                report.errors.contains(&format!("{label} is required")),
                "missing error for {label}: {:?}",
                report.errors
            );
        }
        assert!(report.errors.contains(&"Servings must be a positive number".to_string()));
    }

    #[test]
    fn test_short_lists_warn() {
        let mut form = good();
        form.ingredients = "water: 1 cup".into();
        form.directions = "Boil.".into();
        let report = validate(&form);
        assert!(report.valid);
        assert_eq!(
            report.warnings,
            vec![
                "Recipes with fewer than 3 ingredients might be too simple".to_string(),
                "Consider adding more detailed steps for clarity".to_string(),
            ]
        );
    }

    #[test]
    fn test_servings_bounds() {
        let mut form = good();
        form.servings = "0".into();
        assert!(validate(&form)
            .errors
            .contains(&"Servings must be a positive number".to_string()));

        form.servings = "60".into();
        let report = validate(&form);
        assert!(report.valid);
        assert!(report.warnings[0].starts_with("That's a lot of servings!"));
    }

    #[test]
    fn test_blank_servings_count_as_zero() {
        let mut form = good();
        form.servings = "  ".into();
        assert_eq!(validate(&form).errors, vec!["Servings must be a positive number"]);

        form.servings = "lots".into();
        assert_eq!(validate(&form).errors, vec!["Servings must be a valid number"]);
    }

    #[test]
    fn test_time_without_units_warns() {
        let mut form = good();
        form.prep_time = "a while".into();
        form.cook_time = "45".into();
        let report = validate(&form);
        assert!(report.valid);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].starts_with("Prep Time should include units"));
        assert!(report.warnings[1].starts_with("Cook Time should include units"));
    }

    #[test]
    fn test_human_display() {
        let report = validate(&RecipeForm {
            servings: "4".into(),
            ..good()
        });
        assert_eq!(report.human_display(), "Recipe is valid");

        let mut form = good();
        form.title.clear();
        let text = validate(&form).human_display();
        assert!(text.starts_with("Recipe has 1 error\n"));
        assert!(text.contains("error: Title is required"));
    }
}
