//! Path command
use graphwalk_core::error::Result;
use graphwalk_core::format::{join_path, OutputFormat};
use graphwalk_core::graph::{PathResult, Strategy};

use crate::cli::{Cli, GraphArgs, Vertex};
use crate::commands::input::load_graph;

/// Execute the path command
pub fn execute(
    cli: &Cli,
    input: &GraphArgs,
    from: Vertex,
    to: Vertex,
    strategy: Strategy,
) -> Result<()> {
    let graph = load_graph(input)?;
    let result = graph.find_path(&from, &to, strategy)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => output_human(cli, &result),
    }
    Ok(())
}

fn output_human(cli: &Cli, result: &PathResult<Vertex>) {
    if !result.found {
        println!("No path from {} to {}", result.from, result.to);
        return;
    }

    println!("{}", join_path(&result.path));
    if !cli.quiet {
        let unit = if result.path_length == 1 { "hop" } else { "hops" };
        println!("Path length: {} {} ({})", result.path_length, unit, result.strategy);
    }
}
