use anyhow::Context;
use clap::Parser;

use brevity::config::Config;
use brevity::logging;
use brevity::ui;

#[derive(Debug, Parser)]
#[command(
    name = "brevity",
    version,
    about = "Terminal client for a remote text summarization service"
)]
struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Override the backend base URL for this run.
    #[arg(long)]
    backend_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    // Configuration problems must surface before the UI takes over the
    // terminal, so the message stays readable.
    let config = Config::load(cli.config.as_deref(), cli.backend_url.as_deref())
        .context("failed to load configuration")?;

    ui::runtime::run(config)
}
