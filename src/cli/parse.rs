use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Order, Strategy};

use super::Vertex;

/// Parse an edge or pair written as `A:B`
pub fn parse_edge(s: &str) -> std::result::Result<(Vertex, Vertex), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
    let from = from
        .trim()
        .parse::<Vertex>()
        .map_err(|e| format!("invalid vertex '{}': {}", from, e))?;
    let to = to
        .trim()
        .parse::<Vertex>()
        .map_err(|e| format!("invalid vertex '{}': {}", to, e))?;
    Ok((from, to))
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse traversal order from string
pub fn parse_order(s: &str) -> std::result::Result<Order, String> {
    s.parse::<Order>()
}

/// Parse path strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>()
}
