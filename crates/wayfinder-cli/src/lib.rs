pub mod cli;
pub mod config;

pub use cli::{
    build_cli_command, Cli, Commands, ConfigCommands, GraphCommands, OutputFormat, RouteCommands,
};
pub use config::{load_config, WayfinderConfig};
