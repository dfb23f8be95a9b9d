use anyhow::Result;
use serde::Serialize;
use tracing::info;
use wayfinder_algo::{MinPowerSolution, Path, Router, SearchTrace};
use wayfinder_cli::{OutputFormat, RouteCommands};
use wayfinder_core::{NodeId, Power};

use super::{load, print_json};

const NO_PATH: &str = "no path";

#[derive(Serialize)]
struct MinPowerReport<'a> {
    #[serde(flatten)]
    solution: &'a MinPowerSolution<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a SearchTrace>,
}

fn render_nodes(path: &Path<NodeId>) -> String {
    path.nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn handle(command: &RouteCommands, format: OutputFormat) -> Result<()> {
    match command {
        RouteCommands::Path {
            graph_file,
            src,
            dest,
            power,
        } => {
            let graph = load(graph_file)?;
            let router = Router::new(&graph);
            let (src, dest) = (NodeId::new(*src), NodeId::new(*dest));
            let path = router.shortest_path(&src, &dest, Power(*power));
            info!(%src, %dest, power, found = path.is_some(), "path query");
            match (format, path) {
                (OutputFormat::Json, path) => print_json(&path)?,
                (OutputFormat::Text, Some(path)) => {
                    println!("distance {}", path.distance);
                    println!("path {}", render_nodes(&path));
                    println!("bottleneck power {}", path.bottleneck);
                }
                (OutputFormat::Text, None) => println!("{NO_PATH}"),
            }
            Ok(())
        }
        RouteCommands::MinPower {
            graph_file,
            src,
            dest,
            trace,
        } => {
            let graph = load(graph_file)?;
            let router = Router::new(&graph);
            let (src, dest) = (NodeId::new(*src), NodeId::new(*dest));
            let found = router.minimum_power_traced(&src, &dest);
            info!(%src, %dest, found = found.is_some(), "minimum power query");

            let Some((solution, search)) = found else {
                match format {
                    OutputFormat::Json => print_json(&Option::<()>::None)?,
                    OutputFormat::Text => println!("{NO_PATH}"),
                }
                return Ok(());
            };

            match format {
                OutputFormat::Json => print_json(&MinPowerReport {
                    solution: &solution,
                    trace: trace.then_some(&search),
                })?,
                OutputFormat::Text => {
                    println!("minimum power {}", solution.power);
                    println!("distance {}", solution.path.distance);
                    println!("path {}", render_nodes(&solution.path));
                    if *trace {
                        println!("probes {}", search.len());
                        for probe in &search.probes {
                            let verdict = if probe.feasible { "feasible" } else { "infeasible" };
                            println!("  power {:>20}: {verdict}", probe.power.value());
                        }
                    }
                }
            }
            Ok(())
        }
    }
}
