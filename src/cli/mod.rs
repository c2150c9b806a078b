pub mod render;
pub mod serve;
pub mod sync;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{LarderConfig, ResolvedPaths};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "larder",
    about = "Render recipe pages and keep the recipe index in sync",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Project directory
    #[arg(short, long, global = true)]
    pub dir: Option<String>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a recipe page from command-line values
    Render(render::RenderArgs),

    /// Reconcile the recipe index with the live pages on disk
    #[command(alias = "reconcile")]
    Sync(sync::SyncArgs),

    /// Start the recipe generator form server
    Serve(serve::ServeArgs),

    /// Check recipe values without rendering anything
    Validate(validate::ValidateArgs),
}

/// Loaded config plus the paths resolved against the working directory.
pub struct Project {
    pub config: LarderConfig,
    pub paths: ResolvedPaths,
}

impl Project {
    /// Load `--config` if given, else `larder.toml` when present.
    pub fn load(config_flag: Option<&str>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let explicit = config_flag.map(PathBuf::from);
        let config = LarderConfig::discover(explicit.as_deref(), &cwd)?;
        let paths = config.resolve_paths(&cwd);
        Ok(Self { config, paths })
    }

    /// Apply `--recipes-dir` / `--index-file` overrides.
    pub fn override_paths(&mut self, recipes_dir: Option<&Path>, index_file: Option<&Path>) {
        if let Some(dir) = recipes_dir {
            self.paths.recipes = self.paths.root.join(dir);
        }
        if let Some(file) = index_file {
            self.paths.index = self.paths.root.join(file);
        }
    }
}
