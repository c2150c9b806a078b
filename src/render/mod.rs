pub mod highlight;

use chrono::Datelike;
use serde::Serialize;

use crate::config::LarderConfig;
use crate::error::Result;
use crate::form::{FlashMessage, RecipeForm};
use crate::recipe::{Difficulty, Ingredient, Recipe};
use crate::templates::{self, FORM_TEMPLATE, RECIPE_TEMPLATE};

pub use highlight::highlight_ingredients;

/// Site-wide values stamped into every page.
#[derive(Debug, Clone, Serialize)]
pub struct PageSettings {
    pub name: String,
    pub author: String,
    pub year: i32,
}

impl PageSettings {
    pub fn from_config(config: &LarderConfig) -> Self {
        Self {
            name: config.site.name.clone(),
            author: config.site.author.clone(),
            year: chrono::Local::now().year(),
        }
    }
}

/// Renders recipe pages and the generator form from the embedded templates.
pub struct Renderer {
    tera: tera::Tera,
    settings: PageSettings,
}

impl Renderer {
    pub fn new(settings: PageSettings) -> Result<Self> {
        Ok(Self {
            tera: templates::load_templates()?,
            settings,
        })
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Render a complete recipe document.
    pub fn render_recipe(&self, recipe: &Recipe) -> Result<String> {
        let ingredients_html: String = recipe.ingredients.iter().map(ingredient_row).collect();
        let directions_html: String = recipe
            .directions
            .iter()
            .enumerate()
            .map(|(i, step)| instruction_row(i + 1, step, &recipe.ingredients))
            .collect();

        let mut ctx = tera::Context::new();
        ctx.insert("site", &self.settings);
        ctx.insert("recipe", recipe);
        ctx.insert("difficulty_class", &recipe.difficulty.css_class());
        ctx.insert("ingredients_html", &ingredients_html);
        ctx.insert("directions_html", &directions_html);
        Ok(self.tera.render(RECIPE_TEMPLATE, &ctx)?)
    }

    /// Render the generator form, refilled with `form` and topped by `messages`.
    pub fn render_form(&self, form: &RecipeForm, messages: &[FlashMessage]) -> Result<String> {
        let difficulties: Vec<&str> = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            .iter()
            .map(Difficulty::as_str)
            .collect();

        let mut ctx = tera::Context::new();
        ctx.insert("site", &self.settings);
        ctx.insert("form", form);
        ctx.insert("messages", messages);
        ctx.insert("difficulties", &difficulties);
        Ok(self.tera.render(FORM_TEMPLATE, &ctx)?)
    }
}

/// One entry of the ingredient grid.
pub fn ingredient_row(ingredient: &Ingredient) -> String {
    let amount = ingredient.amount.as_deref().unwrap_or("");
    format!(
        r#"
                            <div class="ingredient-item">
                                <div class="mr-3 mt-1">&#10003;</div>
                                <div><span class="ingredient-amount">{}</span> {}</div>
                            </div>"#,
        tera::escape_html(amount),
        tera::escape_html(&ingredient.name),
    )
}

/// One numbered instruction, with ingredient mentions highlighted.
pub fn instruction_row(index: usize, step: &str, ingredients: &[Ingredient]) -> String {
    format!(
        r#"
                            <li class="instruction-step">
                                <div class="flex">
                                    <div class="flex-shrink-0 mr-4">
                                        <div class="flex items-center justify-center w-8 h-8 bg-gray-700 rounded-full text-white font-bold instruction-step-number">{index}</div>
                                    </div>
                                    <div>
                                        <p>{}</p>
                                    </div>
                                </div>
                            </li>"#,
        highlight_ingredients(step, ingredients),
    )
}
