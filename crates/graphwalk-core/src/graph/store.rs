//! Adjacency storage for directed graphs

use std::collections::{BTreeMap, BTreeSet};

use crate::bail_unknown_vertex;
use crate::error::Result;
use crate::graph::types::{GraphSpec, VertexId};

/// Directed graph stored as vertex -> outgoing neighbor set.
///
/// Vertices and edges are only ever added. Both endpoints of an edge must
/// already be known; nothing is created implicitly.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: BTreeMap<V, BTreeSet<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph {
            vertices: BTreeMap::new(),
        }
    }
}

impl<V: VertexId> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a serializable description.
    ///
    /// Listed vertices are added first, then any edge endpoint not yet
    /// known, then the edges themselves.
    pub fn from_spec(spec: GraphSpec<V>) -> Result<Self> {
        let mut graph = Graph::new();
        for vertex in spec.vertices {
            graph.add_vertex(vertex);
        }
        for (from, to) in &spec.edges {
            graph.ensure_vertex(from.clone());
            graph.ensure_vertex(to.clone());
        }
        for (from, to) in spec.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Insert a vertex with no outgoing edges.
    ///
    /// Re-adding an existing vertex clears its outgoing edges.
    pub fn add_vertex(&mut self, id: V) {
        self.vertices.insert(id, BTreeSet::new());
    }

    fn ensure_vertex(&mut self, id: V) {
        self.vertices.entry(id).or_default();
    }

    /// Insert the directed edge `from -> to`
    pub fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        if !self.vertices.contains_key(&to) {
            bail_unknown_vertex!(to);
        }
        match self.vertices.get_mut(&from) {
            Some(edges) => {
                edges.insert(to);
                Ok(())
            }
            None => bail_unknown_vertex!(from),
        }
    }

    pub fn contains(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Outgoing neighbors of `id`, in ascending order
    pub fn neighbors(&self, id: &V) -> Result<&BTreeSet<V>> {
        match self.vertices.get(id) {
            Some(edges) => Ok(edges),
            None => bail_unknown_vertex!(id),
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn require(&self, id: &V) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            bail_unknown_vertex!(id)
        }
    }

    /// Neighbors of a vertex known to be present.
    ///
    /// Edge endpoints are always known vertices, so every vertex reached
    /// through an edge has an entry.
    pub(crate) fn adjacent(&self, id: &V) -> impl Iterator<Item = &V> {
        self.vertices.get(id).into_iter().flatten()
    }
}
