//! Wraps ingredient mentions inside instruction steps.
//!
//! Ingredients are matched longest name first. Once a stretch of text has been
//! wrapped it is set aside and never scanned again, so `flour` cannot match
//! inside an earlier `all-purpose flour` wrap. There is no backtracking either:
//! if a longer name claims part of a shorter, overlapping one, the shorter one
//! stays unhighlighted.

use regex::{Regex, RegexBuilder};

use crate::recipe::Ingredient;

/// A piece of the step being highlighted.
enum Segment {
    /// Plain step text, still open to matching.
    Text(String),
    /// Rendered marker markup, closed to further matching.
    Marked(String),
}

/// Highlight ingredient mentions in a plain-text `step`, returning HTML.
///
/// Each match of an ingredient name (case-insensitive, whole word, optional
/// trailing `s`) becomes `<span class="ingredient-used">NAME (AMOUNT)</span>`.
/// Unmatched text is HTML-escaped.
pub fn highlight_ingredients(step: &str, ingredients: &[Ingredient]) -> String {
    let mut ordered: Vec<&Ingredient> = ingredients
        .iter()
        .filter(|i| !i.name.trim().is_empty())
        .collect();
    // Stable: equal lengths keep their listed order.
    ordered.sort_by_key(|i| std::cmp::Reverse(i.name.chars().count()));

    let mut segments = vec![Segment::Text(step.to_string())];

    for ingredient in ordered {
        let Some(pattern) = mention_pattern(&ingredient.name) else {
            tracing::debug!("skipping unmatchable ingredient name {:?}", ingredient.name);
            continue;
        };
        let marker = ingredient_marker(ingredient);

        segments = segments
            .into_iter()
            .flat_map(|segment| match segment {
                Segment::Text(text) => split_on_mentions(&text, &pattern, &marker),
                marked => vec![marked],
            })
            .collect();
    }

    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => tera::escape_html(text),
            Segment::Marked(html) => html.clone(),
        })
        .collect()
}

/// The markup that replaces one ingredient mention.
pub fn ingredient_marker(ingredient: &Ingredient) -> String {
    let name = tera::escape_html(&ingredient.name);
    match &ingredient.amount {
        Some(amount) => format!(
            r#"<span class="ingredient-used">{name} ({})</span>"#,
            tera::escape_html(amount)
        ),
        None => format!(r#"<span class="ingredient-used">{name}</span>"#),
    }
}

fn mention_pattern(name: &str) -> Option<Regex> {
    let escaped = regex::escape(&name.to_lowercase());
    RegexBuilder::new(&format!(r"\b{escaped}s?\b"))
        .case_insensitive(true)
        .build()
        .ok()
}

fn split_on_mentions(text: &str, pattern: &Regex, marker: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            out.push(Segment::Text(text[last..found.start()].to_string()));
        }
        out.push(Segment::Marked(marker.to_string()));
        last = found.end();
    }
    if last < text.len() {
        out.push(Segment::Text(text[last..].to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ing(name: &str, amount: &str) -> Ingredient {
        Ingredient::new(name, Some(amount))
    }

    #[test]
    fn test_wraps_each_ingredient_with_amount() {
        let out = highlight_ingredients(
            "Add flour and sugar",
            &[ing("flour", "2 cups"), ing("sugar", "1 cup")],
        );
        assert_eq!(
            out,
            r#"Add <span class="ingredient-used">flour (2 cups)</span> and <span class="ingredient-used">sugar (1 cup)</span>"#
        );
    }

    #[test]
    fn test_matching_ignores_case() {
        let out = highlight_ingredients("Sift the Flour twice", &[ing("flour", "2 cups")]);
        assert!(out.contains(r#"<span class="ingredient-used">flour (2 cups)</span>"#));
        assert!(!out.contains("Flour"));

        let out = highlight_ingredients("sift the flour", &[ing("FLOUR", "2 cups")]);
        assert!(out.contains(r#"<span class="ingredient-used">FLOUR (2 cups)</span>"#));
    }

    #[test]
    fn test_matches_plural() {
        let out = highlight_ingredients("Crack the eggs", &[ing("egg", "3")]);
        assert_eq!(
            out,
            r#"Crack the <span class="ingredient-used">egg (3)</span>"#
        );
    }

    #[test]
    fn test_requires_word_boundaries() {
        let out = highlight_ingredients("Use an eggplant", &[ing("egg", "3")]);
        assert_eq!(out, "Use an eggplant");
    }

    #[test]
    fn test_no_amount_shows_name_only() {
        let out = highlight_ingredients("Season with salt", &[Ingredient::new("salt", None)]);
        assert_eq!(
            out,
            r#"Season with <span class="ingredient-used">salt</span>"#
        );
    }

    #[test]
    fn test_longer_name_wins_and_is_wrapped_once() {
        let out = highlight_ingredients(
            "Whisk the all-purpose flour",
            &[ing("flour", "1 cup"), ing("all-purpose flour", "2 cups")],
        );
        assert_eq!(
            out,
            r#"Whisk the <span class="ingredient-used">all-purpose flour (2 cups)</span>"#
        );
        assert_eq!(out.matches("ingredient-used").count(), 1);
    }

    #[test]
    fn test_shorter_name_still_matches_elsewhere() {
        let out = highlight_ingredients(
            "Mix all-purpose flour, then dust with flour",
            &[ing("flour", "1 cup"), ing("all-purpose flour", "2 cups")],
        );
        assert!(out.contains("all-purpose flour (2 cups)"));
        assert!(out.contains(r#"dust with <span class="ingredient-used">flour (1 cup)</span>"#));
        assert_eq!(out.matches("ingredient-used").count(), 2);
    }

    #[test]
    fn test_known_limitation_overlapping_names_do_not_backtrack() {
        // "onion powder" is longer and claims "onion", so "green onion" never
        // gets its own highlight even though the step mentions it.
        let out = highlight_ingredients(
            "Add green onion powder",
            &[ing("green onion", "2"), ing("onion powder", "1 tsp")],
        );
        assert_eq!(
            out,
            r#"Add green <span class="ingredient-used">onion powder (1 tsp)</span>"#
        );
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let out = highlight_ingredients(
            "Stir in the salt. Then the salt+pepper mix",
            &[ing("salt+pepper", "1 tsp")],
        );
        assert!(out.contains(r#"<span class="ingredient-used">salt+pepper (1 tsp)</span>"#));
        assert!(out.contains("Stir in the salt."));

        let out = highlight_ingredients("Add the c.heese", &[ing("c.heese", "1")]);
        assert!(out.contains("ingredient-used"));
        let out = highlight_ingredients("Add the cxheese", &[ing("c.heese", "1")]);
        assert!(!out.contains("ingredient-used"));
    }

    #[test]
    fn test_step_text_is_escaped() {
        let out = highlight_ingredients("Bake <b>hot</b> & serve", &[]);
        assert_eq!(out, "Bake &lt;b&gt;hot&lt;&#x2F;b&gt; &amp; serve");
    }

    #[test]
    fn test_blank_ingredient_names_are_ignored() {
        let out = highlight_ingredients("Mix well", &[ing("  ", "1")]);
        assert_eq!(out, "Mix well");
    }
}
