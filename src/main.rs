use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use larder::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(ref dir) = cli.dir {
        std::env::set_current_dir(dir)?;
    }

    let config = cli.config.as_deref();
    let format = cli.output_format();

    match &cli.command {
        Command::Render(args) => larder::cli::render::run(args, config, format)?,
        Command::Sync(args) => larder::cli::sync::run(args, config, format, cli.verbose)?,
        Command::Serve(args) => larder::cli::serve::run(args, config)?,
        Command::Validate(args) => larder::cli::validate::run(args, format)?,
    }

    Ok(())
}
