use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::form::RecipeForm;
use crate::index::{self, ExtractOptions, ReconcileReport, SyncOptions};
use crate::output::{self, CommandOutput, OutputFormat};
use crate::recipe::{self, Difficulty, Recipe};
use crate::render::{PageSettings, Renderer};

use super::Project;

/// Recipe values given as flags. Lists are comma-separated.
#[derive(Args, Debug, Clone)]
pub struct RecipeArgs {
    /// Recipe title
    #[arg(long)]
    pub title: String,

    /// Short description shown under the title
    #[arg(long, default_value = "")]
    pub description: String,

    /// easy, medium or hard
    #[arg(long, default_value = "easy")]
    pub difficulty: Difficulty,

    #[arg(long, default_value = "")]
    pub prep_time: String,

    #[arg(long, default_value = "")]
    pub cook_time: String,

    /// Number of servings (anything but a positive integer becomes 4)
    #[arg(long, default_value = "4")]
    pub servings: String,

    /// Comma-separated categories
    #[arg(long, default_value = "")]
    pub categories: String,

    /// Comma-separated `name:amount` pairs
    #[arg(long, default_value = "")]
    pub ingredients: String,

    /// Comma-separated steps
    #[arg(long, default_value = "")]
    pub directions: String,

    #[arg(long, default_value = "")]
    pub notes: String,
}

impl RecipeArgs {
    pub fn to_recipe(&self) -> Recipe {
        Recipe {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            difficulty: self.difficulty,
            prep_time: self.prep_time.trim().to_string(),
            cook_time: self.cook_time.trim().to_string(),
            servings: recipe::parse_servings(&self.servings),
            categories: recipe::parse_categories(&self.categories),
            ingredients: recipe::parse_ingredients(&self.ingredients, ','),
            directions: recipe::parse_directions(&self.directions, ','),
            notes: self.notes.trim().to_string(),
        }
    }

    /// The same values in the shape the generator form submits them.
    pub fn to_form(&self) -> RecipeForm {
        let lines = |s: &str| s.split(',').collect::<Vec<_>>().join("\n");
        RecipeForm {
            title: self.title.clone(),
            description: self.description.clone(),
            difficulty: self.difficulty.to_string(),
            servings: self.servings.clone(),
            prep_time: self.prep_time.clone(),
            cook_time: self.cook_time.clone(),
            categories: self.categories.clone(),
            ingredients: lines(&self.ingredients),
            directions: lines(&self.directions),
            notes: self.notes.clone(),
        }
    }
}

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,

    /// Output file (default: <recipes_dir>/<id>.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Reconcile the recipe index after writing the page
    #[arg(long)]
    pub update_index: bool,
}

#[derive(Debug, Serialize)]
pub struct RenderOutput {
    pub id: String,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<ReconcileReport>,
    #[serde(skip)]
    pub index_file: PathBuf,
}

impl CommandOutput for RenderOutput {
    fn human_display(&self) -> String {
        let mut out = format!("Recipe HTML generated: {}", self.path.display());
        if let Some(report) = &self.index {
            out.push_str("\n\n");
            out.push_str(&report.human_display());
            out.push_str(&format!("\nUpdated {}", self.index_file.display()));
        }
        out
    }
}

pub fn run(args: &RenderArgs, config: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    let project = Project::load(config)?;
    let recipe = args.recipe.to_recipe();
    let id = recipe.id();
    if id.is_empty() {
        anyhow::bail!("title '{}' produces an empty recipe id", recipe.title);
    }

    let renderer = Renderer::new(PageSettings::from_config(&project.config))?;
    let html = renderer.render_recipe(&recipe)?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| project.paths.recipes.join(format!("{id}.html")));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, html)?;
    tracing::debug!("wrote {} for {id}", path.display());

    let index = if args.update_index {
        let extract = ExtractOptions::for_site(&project.config.site.name);
        let outcome = index::sync_index(&project.paths, &extract, &SyncOptions { dry_run: false })?;
        Some(outcome.report)
    } else {
        None
    };

    let result = RenderOutput {
        id,
        path,
        index,
        index_file: project.paths.index.clone(),
    };
    output::print_output(&result, format);
    Ok(())
}
