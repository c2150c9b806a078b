use clap::Args;

use crate::form;
use crate::output::{self, human, OutputFormat};

use super::render::RecipeArgs;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub recipe: RecipeArgs,
}

pub fn run(args: &ValidateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let report = form::validate(&args.recipe.to_form());
    match format {
        OutputFormat::Json => output::print_output(&report, format),
        OutputFormat::Human if report.valid => {
            human::success("Recipe is valid");
            for warning in &report.warnings {
                human::warning(warning);
            }
        }
        OutputFormat::Human => output::print_output(&report, format),
    }

    if !report.valid {
        anyhow::bail!(
            "recipe has {} validation error{}",
            report.errors.len(),
            if report.errors.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
