use std::collections::{BTreeSet, VecDeque};

use crate::error::Result;
use crate::graph::store::Graph;
use crate::graph::types::{Order, TraversalResult, VertexId};

/// Pending-vertex collection that decides visitation order
pub trait Frontier<V>: Default {
    fn put(&mut self, vertex: V);
    fn take(&mut self) -> Option<V>;
}

/// First in, first out: breadth-first order
impl<V> Frontier<V> for VecDeque<V> {
    fn put(&mut self, vertex: V) {
        self.push_back(vertex);
    }

    fn take(&mut self) -> Option<V> {
        self.pop_front()
    }
}

/// Last in, first out: depth-first order
impl<V> Frontier<V> for Vec<V> {
    fn put(&mut self, vertex: V) {
        self.push(vertex);
    }

    fn take(&mut self) -> Option<V> {
        self.pop()
    }
}

/// Lazy, one-shot traversal over a borrowed graph.
///
/// Every neighbor of an emitted vertex is queued whether or not it has been
/// seen; already-visited vertices are dropped when they come off the
/// frontier.
pub struct Walk<'g, V, F> {
    graph: &'g Graph<V>,
    frontier: F,
    visited: BTreeSet<V>,
}

/// Breadth-first traversal
pub type Bft<'g, V> = Walk<'g, V, VecDeque<V>>;

/// Iterative depth-first traversal
pub type Dft<'g, V> = Walk<'g, V, Vec<V>>;

impl<'g, V: VertexId, F: Frontier<V>> Walk<'g, V, F> {
    fn new(graph: &'g Graph<V>, start: V) -> Self {
        let mut frontier = F::default();
        frontier.put(start);
        Walk {
            graph,
            frontier,
            visited: BTreeSet::new(),
        }
    }

    /// Vertices emitted so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl<V: VertexId, F: Frontier<V>> Iterator for Walk<'_, V, F> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        while let Some(vertex) = self.frontier.take() {
            if self.visited.insert(vertex.clone()) {
                for neighbor in self.graph.adjacent(&vertex) {
                    self.frontier.put(neighbor.clone());
                }
                return Some(vertex);
            }
        }
        None
    }
}

impl<V: VertexId> Graph<V> {
    /// Breadth-first traversal from `start`
    pub fn bft(&self, start: &V) -> Result<Bft<'_, V>> {
        self.require(start)?;
        Ok(Walk::new(self, start.clone()))
    }

    /// Depth-first traversal from `start` using an explicit stack
    pub fn dft(&self, start: &V) -> Result<Dft<'_, V>> {
        self.require(start)?;
        Ok(Walk::new(self, start.clone()))
    }

    /// Depth-first traversal from `start` using recursion, emitting each
    /// vertex into `sink` as it is first visited.
    ///
    /// Recursion depth grows with the longest simple path reachable from
    /// `start`; prefer [`Graph::dft`] for very deep graphs.
    pub fn dft_recursive<S>(&self, start: &V, mut sink: S) -> Result<()>
    where
        S: FnMut(&V),
    {
        self.require(start)?;
        let mut visited = BTreeSet::new();
        self.dft_visit(start, &mut visited, &mut sink);
        Ok(())
    }

    /// Recursive depth-first traversal collected into a vector
    pub fn dft_recursive_vec(&self, start: &V) -> Result<Vec<V>> {
        let mut order = Vec::new();
        self.dft_recursive(start, |v| order.push(v.clone()))?;
        Ok(order)
    }

    fn dft_visit<S>(&self, vertex: &V, visited: &mut BTreeSet<V>, sink: &mut S)
    where
        S: FnMut(&V),
    {
        visited.insert(vertex.clone());
        sink(vertex);
        for neighbor in self.adjacent(vertex) {
            if !visited.contains(neighbor) {
                self.dft_visit(neighbor, visited, sink);
            }
        }
    }

    /// Run a full traversal in the given order
    #[tracing::instrument(skip_all, fields(start = %start, order = %order))]
    pub fn traverse(&self, start: &V, order: Order) -> Result<TraversalResult<V>> {
        let visited: Vec<V> = match order {
            Order::Bft => self.bft(start)?.collect(),
            Order::Dft => self.dft(start)?.collect(),
            Order::DftRecursive => self.dft_recursive_vec(start)?,
        };

        tracing::debug!(visited = visited.len(), "traversal complete");

        Ok(TraversalResult {
            start: start.clone(),
            order,
            visited,
        })
    }
}
