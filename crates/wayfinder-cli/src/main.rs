use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, warn, Level};
use tracing_subscriber::FmtSubscriber;
use wayfinder_cli::{config, Cli, Commands, ConfigCommands, WayfinderConfig};
use wayfinder_core::WayfinderResult;

mod commands;

/// `--log-level` wins, then a readable `[logging] level`, then `info`.
fn max_level(cli: &Cli, settings: &WayfinderResult<WayfinderConfig>) -> Level {
    cli.log_level
        .or_else(|| {
            let settings = settings.as_ref().ok()?;
            settings.logging.max_level().ok()
        })
        .unwrap_or(Level::INFO)
}

fn run(cli: &Cli, settings: WayfinderResult<WayfinderConfig>) -> Result<()> {
    // init rewrites the file, so a broken one must not block it
    let repairing = matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Init { .. }
        }
    );
    let settings = match settings {
        Err(err) if repairing => {
            warn!("ignoring current config: {err}");
            WayfinderConfig::default()
        }
        settings => settings?,
    };
    if cli.log_level.is_none() && !repairing {
        settings.logging.max_level()?;
    }

    let format = cli.format.unwrap_or(settings.output.format);
    debug!(?format, "starting wayfinder");

    match &cli.command {
        Commands::Graph { command } => commands::graph::handle(command, format),
        Commands::Route { command } => commands::route::handle(command, format),
        Commands::Config { command } => {
            commands::config::handle(command, cli.config.as_deref(), &settings)
        }
        Commands::Completions { shell, out } => {
            commands::completions::handle(*shell, out.as_deref())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = config::load_config(cli.config.as_deref());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level(&cli, &settings))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match run(&cli, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
