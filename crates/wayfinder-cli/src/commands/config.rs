use std::path::Path;

use anyhow::{bail, Result};
use wayfinder_cli::config::{resolve_config_path, save_config, WayfinderConfig};
use wayfinder_cli::ConfigCommands;

pub fn handle(
    command: &ConfigCommands,
    explicit: Option<&Path>,
    effective: &WayfinderConfig,
) -> Result<()> {
    let path = resolve_config_path(explicit)?;
    match command {
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            save_config(&WayfinderConfig::default(), &path)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigCommands::Show => {
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(effective)?);
        }
    }
    Ok(())
}
