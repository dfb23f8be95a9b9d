use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wayfinder", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level (overrides the config file)
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    /// Read configuration from this file instead of ~/.wayfinder/config/wayfinder.toml
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect a graph description
    Graph {
        #[command(subcommand)]
        command: GraphCommands,
    },
    /// Power-constrained routing queries
    Route {
        #[command(subcommand)]
        command: RouteCommands,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GraphCommands {
    /// Graph stats summary
    Stats {
        /// Path to the graph description file
        #[arg(value_hint = ValueHint::FilePath)]
        graph_file: PathBuf,
    },
    /// Find islands (connected components) in the graph
    Islands {
        /// Path to the graph description file
        #[arg(value_hint = ValueHint::FilePath)]
        graph_file: PathBuf,
        /// Emit island IDs per node
        #[arg(long)]
        emit: bool,
    },
    /// Export graph to various formats
    Export {
        /// Path to the graph description file
        #[arg(value_hint = ValueHint::FilePath)]
        graph_file: PathBuf,
        /// Export format (dot or graphviz)
        #[arg(long = "to", default_value = "dot")]
        to: String,
        /// Optional output file path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print every node with its incident edges
    Show {
        /// Path to the graph description file
        #[arg(value_hint = ValueHint::FilePath)]
        graph_file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// Shortest path using only edges whose power requirement fits the budget
    Path {
        /// Path to the graph description file
        #[arg(value_hint = ValueHint::FilePath)]
        graph_file: PathBuf,
        /// Source node
        src: usize,
        /// Destination node
        dest: usize,
        /// Power budget
        #[arg(long, short)]
        power: u64,
    },
    /// Smallest power budget that connects two nodes
    MinPower {
        /// Path to the graph description file
        #[arg(value_hint = ValueHint::FilePath)]
        graph_file: PathBuf,
        /// Source node
        src: usize,
        /// Destination node
        dest: usize,
        /// Also report every budget probed by the search
        #[arg(long)]
        trace: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
