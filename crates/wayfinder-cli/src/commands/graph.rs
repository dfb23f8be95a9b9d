use std::fs;

use anyhow::Result;
use wayfinder_algo::find_islands;
use wayfinder_cli::{GraphCommands, OutputFormat};
use wayfinder_core::graph_utils;

use super::{load, print_json};

pub fn handle(command: &GraphCommands, format: OutputFormat) -> Result<()> {
    match command {
        GraphCommands::Stats { graph_file } => {
            let graph = load(graph_file)?;
            let stats = graph_utils::graph_stats(&graph);
            if format == OutputFormat::Json {
                return print_json(&stats);
            }
            println!("Graph statistics for {}:", graph_file.display());
            println!("  Nodes         : {}", stats.node_count);
            println!("  Edges         : {}", stats.edge_count);
            println!("  Components    : {}", stats.connected_components);
            println!(
                "  Degree [min/avg/max]: {}/{:.2}/{}",
                stats.min_degree, stats.avg_degree, stats.max_degree
            );
            println!("  Density       : {:.4}", stats.density);
            match stats.max_power {
                Some(power) => println!("  Max power     : {power}"),
                None => println!("  Max power     : -"),
            }
            Ok(())
        }
        GraphCommands::Islands { graph_file, emit } => {
            let graph = load(graph_file)?;
            let analysis = find_islands(&graph);
            if format == OutputFormat::Json {
                return print_json(&analysis);
            }
            for summary in &analysis.islands {
                println!(
                    "Island {}: {} node(s)",
                    summary.island_id, summary.node_count
                );
            }
            if *emit {
                println!("\nNode → Island assignments:");
                for assignment in &analysis.assignments {
                    println!(
                        "  idx {:>3}: {:<20} -> island {}",
                        assignment.node_index, assignment.label, assignment.island_id
                    );
                }
            }
            Ok(())
        }
        GraphCommands::Export {
            graph_file,
            to,
            out,
        } => {
            let graph = load(graph_file)?;
            let rendered = graph_utils::export_graph(&graph, to)?;
            if let Some(path) = out {
                fs::write(path, &rendered)?;
                println!("Graph exported to {}", path.display());
            } else {
                println!("{rendered}");
            }
            Ok(())
        }
        GraphCommands::Show { graph_file } => {
            let graph = load(graph_file)?;
            print!("{}", graph.describe());
            Ok(())
        }
    }
}
