use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a vertex in a [`Graph`](crate::graph::Graph).
///
/// Ordering keeps neighbor iteration, and therefore every traversal,
/// deterministic. Display is used in error messages.
pub trait VertexId: Ord + Clone + fmt::Debug + fmt::Display {}

impl<T> VertexId for T where T: Ord + Clone + fmt::Debug + fmt::Display {}

/// Visitation order for a full traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Breadth-first, queue based
    #[default]
    Bft,
    /// Depth-first, explicit stack
    Dft,
    /// Depth-first, call stack
    DftRecursive,
}

impl std::str::FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bft" => Ok(Order::Bft),
            "dft" => Ok(Order::Dft),
            "dft-recursive" | "dft_recursive" => Ok(Order::DftRecursive),
            other => Err(format!(
                "unknown order '{}' (expected: bft, dft, dft-recursive)",
                other
            )),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Bft => write!(f, "bft"),
            Order::Dft => write!(f, "dft"),
            Order::DftRecursive => write!(f, "dft-recursive"),
        }
    }
}

/// Frontier discipline for a single-destination path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Breadth-first: shortest path by edge count
    #[default]
    Bfs,
    /// Depth-first: some path, not necessarily shortest
    Dfs,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            other => Err(format!(
                "unknown strategy '{}' (expected: bfs, dfs)",
                other
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
        }
    }
}

/// Serializable description of a directed graph.
///
/// Vertices that only appear as edge endpoints are added implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSpec<V> {
    #[serde(default)]
    pub vertices: Vec<V>,
    #[serde(default)]
    pub edges: Vec<(V, V)>,
}

impl<V> Default for GraphSpec<V> {
    fn default() -> Self {
        GraphSpec {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// Result of a full traversal
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult<V> {
    pub start: V,
    pub order: Order,
    pub visited: Vec<V>,
}

/// Result of a path search
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<V> {
    pub from: V,
    pub to: V,
    pub strategy: Strategy,
    pub found: bool,
    pub path: Vec<V>,
    /// Number of edges on the path
    pub path_length: usize,
}

impl<V> PathResult<V> {
    pub fn found(from: V, to: V, strategy: Strategy, path: Vec<V>) -> Self {
        PathResult {
            from,
            to,
            strategy,
            found: true,
            path_length: path.len().saturating_sub(1),
            path,
        }
    }

    pub fn not_found(from: V, to: V, strategy: Strategy) -> Self {
        PathResult {
            from,
            to,
            strategy,
            found: false,
            path: Vec::new(),
            path_length: 0,
        }
    }
}
