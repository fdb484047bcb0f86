//! Traverse command
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Order, TraversalResult};

use crate::cli::{Cli, GraphArgs, Vertex};
use crate::commands::input::load_graph;

/// Execute the traverse command
pub fn execute(cli: &Cli, input: &GraphArgs, start: Vertex, order: Order) -> Result<()> {
    let graph = load_graph(input)?;
    let result = graph.traverse(&start, order)?;

    match cli.format {
        OutputFormat::Json => output_json(&result)?,
        OutputFormat::Human => output_human(cli, &result),
    }
    Ok(())
}

fn output_human(cli: &Cli, result: &TraversalResult<Vertex>) {
    if !cli.quiet {
        println!("{} from {}:", result.order, result.start);
    }
    for vertex in &result.visited {
        println!("{}", vertex);
    }
}

fn output_json(result: &TraversalResult<Vertex>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
