//! Ancestor command
use graphwalk_core::ancestor::{AncestorMap, NO_ANCESTOR};
use graphwalk_core::error::Result;
use graphwalk_core::format::{join_path, OutputFormat};

use crate::cli::{Cli, Vertex};

/// Execute the ancestor command
pub fn execute(cli: &Cli, pairs: &[(Vertex, Vertex)], start: Vertex) -> Result<()> {
    let map = AncestorMap::from_pairs(pairs.iter().copied());
    let ancestry = map.longest_ancestry(&start);
    let earliest = ancestry
        .as_ref()
        .and_then(|path| path.last().copied())
        .unwrap_or(NO_ANCESTOR);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "earliest_ancestor": earliest,
                "ancestry": ancestry.unwrap_or_default(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", earliest);
            if !cli.quiet {
                if let Some(path) = &ancestry {
                    println!("Ancestry: {}", join_path(path));
                }
            }
        }
    }
    Ok(())
}
