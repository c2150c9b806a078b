use clap::Args;

use crate::output::human;
use crate::render::{PageSettings, Renderer};
use crate::server;

use super::Project;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to serve on (default: [server] port in larder.toml, else 5000)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Try the next free port when the requested one is taken
    #[arg(long)]
    pub auto_port: bool,
}

pub fn run(args: &ServeArgs, config: Option<&str>) -> anyhow::Result<()> {
    let project = Project::load(config)?;
    let port = args.port.unwrap_or(project.config.server.port);

    let renderer = Renderer::new(PageSettings::from_config(&project.config))?;
    let handle = server::start(renderer, port, args.auto_port)?;
    human::info("Press Ctrl+C to stop the server");
    handle.wait();
    Ok(())
}
