//! Graph construction from command-line input
use std::fs;

use graphwalk_core::bail_usage;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{Graph, GraphSpec};

use crate::cli::{GraphArgs, Vertex};

/// Build a graph from `--graph` (if given) plus any `--edge` flags
pub fn load_graph(args: &GraphArgs) -> Result<Graph<Vertex>> {
    let mut spec: GraphSpec<Vertex> = match &args.graph {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        None => GraphSpec::default(),
    };
    spec.edges.extend(args.edges.iter().copied());

    if spec.vertices.is_empty() && spec.edges.is_empty() {
        bail_usage!("no graph given (use --edge FROM:TO or --graph FILE)");
    }

    let graph = Graph::from_spec(spec)?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}
