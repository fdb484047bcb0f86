mod path;

pub use path::reconstruct_path;

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::store::Graph;
use crate::graph::types::{PathResult, Strategy, VertexId};

/// Breadth-first search recording each vertex's parent at first discovery.
///
/// With `to == None` the whole reachable set is explored.
fn bfs_search<V: VertexId>(graph: &Graph<V>, from: &V, to: Option<&V>) -> (bool, BTreeMap<V, V>) {
    let mut discovered: BTreeSet<V> = BTreeSet::new();
    let mut parents: BTreeMap<V, V> = BTreeMap::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    discovered.insert(from.clone());
    queue.push_back(from.clone());

    while let Some(current) = queue.pop_front() {
        if to == Some(&current) {
            return (true, parents);
        }

        for neighbor in graph.adjacent(&current) {
            // First writer wins: a discovered vertex keeps its parent
            if discovered.insert(neighbor.clone()) {
                parents.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor.clone());
            }
        }
    }

    tracing::trace!(discovered = discovered.len(), "bfs frontier exhausted");
    (false, parents)
}

/// Depth-first search with an explicit stack.
///
/// A parent pointer is only rewritten while its vertex is still unvisited,
/// so it always names the vertex the search actually expanded it from.
fn dfs_search<V: VertexId>(graph: &Graph<V>, from: &V, to: &V) -> (bool, BTreeMap<V, V>) {
    let mut visited: BTreeSet<V> = BTreeSet::new();
    let mut parents: BTreeMap<V, V> = BTreeMap::new();
    let mut stack: Vec<V> = vec![from.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if &current == to {
            return (true, parents);
        }

        for neighbor in graph.adjacent(&current) {
            if !visited.contains(neighbor) {
                parents.insert(neighbor.clone(), current.clone());
                stack.push(neighbor.clone());
            }
        }
    }

    tracing::trace!(visited = visited.len(), "dfs frontier exhausted");
    (false, parents)
}

impl<V: VertexId> Graph<V> {
    /// Shortest path (by edge count) from `from` to `to`
    #[tracing::instrument(skip_all, fields(from = %from, to = %to))]
    pub fn bfs(&self, from: &V, to: &V) -> Result<Vec<V>> {
        self.require(from)?;
        self.require(to)?;

        let (found, parents) = bfs_search(self, from, Some(to));
        if !found {
            return Err(GraphError::unreachable(from, to));
        }
        let path = reconstruct_path(from, to, &parents)?;
        tracing::debug!(path_length = path.len() - 1, "bfs path found");
        Ok(path)
    }

    /// Some path from `from` to `to`, found depth-first; not necessarily
    /// the shortest
    #[tracing::instrument(skip_all, fields(from = %from, to = %to))]
    pub fn dfs(&self, from: &V, to: &V) -> Result<Vec<V>> {
        self.require(from)?;
        self.require(to)?;

        let (found, parents) = dfs_search(self, from, to);
        if !found {
            return Err(GraphError::unreachable(from, to));
        }
        let path = reconstruct_path(from, to, &parents)?;
        tracing::debug!(path_length = path.len() - 1, "dfs path found");
        Ok(path)
    }

    /// Shortest path from `from` to every reachable vertex.
    ///
    /// `from` itself maps to `[from]`.
    #[tracing::instrument(skip_all, fields(from = %from))]
    pub fn all_shortest_paths(&self, from: &V) -> Result<BTreeMap<V, Vec<V>>> {
        self.require(from)?;

        let (_, parents) = bfs_search(self, from, None);
        let mut paths = BTreeMap::new();
        paths.insert(from.clone(), vec![from.clone()]);
        for vertex in parents.keys() {
            let path = reconstruct_path(from, vertex, &parents)?;
            paths.insert(vertex.clone(), path);
        }

        tracing::debug!(reachable = paths.len(), "shortest paths computed");
        Ok(paths)
    }

    /// Path search with the given strategy.
    ///
    /// An unreachable destination yields a result with `found == false`;
    /// unknown endpoints are still errors.
    pub fn find_path(&self, from: &V, to: &V, strategy: Strategy) -> Result<PathResult<V>> {
        let outcome = match strategy {
            Strategy::Bfs => self.bfs(from, to),
            Strategy::Dfs => self.dfs(from, to),
        };

        match outcome {
            Ok(path) => Ok(PathResult::found(from.clone(), to.clone(), strategy, path)),
            Err(GraphError::Unreachable { .. }) => {
                Ok(PathResult::not_found(from.clone(), to.clone(), strategy))
            }
            Err(e) => Err(e),
        }
    }
}
