//! Core graph structure — vertex set + edge set with an adjacency index.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::config::{GraphConfig, SelfLoopPolicy};
use crate::types::{Edge, GraphError, GraphResult};

/// An undirected graph over caller-supplied vertex identifiers.
///
/// Ordered containers keep iteration (and therefore every traversal built on
/// top of [`Graph::neighbours`]) deterministic.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// All vertices.
    vertices: BTreeSet<V>,
    /// All edges, normalized.
    edges: BTreeSet<Edge<V>>,
    /// vertex -> neighbours. Every vertex has an entry, possibly empty.
    adjacency: BTreeMap<V, BTreeSet<V>>,
    config: GraphConfig,
}

impl<V: Ord + Clone + fmt::Debug> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph with explicit settings.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: BTreeSet::new(),
            adjacency: BTreeMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// True when `{a, b}` is an edge, in either order.
    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbours| neighbours.contains(b))
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// All edges in ascending order of their normalized endpoints.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> {
        self.edges.iter()
    }

    /// Add a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if !self.vertices.insert(vertex.clone()) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeSet::new());
        true
    }

    /// Add several vertices at once. Already-present vertices are skipped.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Add the edge `{a, b}`. Returns false if it was already present.
    ///
    /// Both endpoints must already be vertices; `a` is checked first.
    pub fn add_edge(&mut self, a: V, b: V) -> GraphResult<bool> {
        if !self.vertices.contains(&a) {
            return Err(GraphError::not_found(&a));
        }
        if !self.vertices.contains(&b) {
            return Err(GraphError::not_found(&b));
        }
        if a == b && self.config.self_loops == SelfLoopPolicy::Reject {
            return Err(GraphError::SelfLoop(format!("{a:?}")));
        }

        if !self.edges.insert(Edge::new(a.clone(), b.clone())) {
            return Ok(false);
        }
        self.link(&a, &b);
        self.link(&b, &a);
        Ok(true)
    }

    /// Remove the edge `{a, b}`, in either order.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> GraphResult<()> {
        if !self.contains_edge(a, b) {
            return Err(GraphError::edge_not_found(a, b));
        }

        self.edges.remove(&Edge::new(a.clone(), b.clone()));
        if let Some(neighbours) = self.adjacency.get_mut(a) {
            neighbours.remove(b);
        }
        if let Some(neighbours) = self.adjacency.get_mut(b) {
            neighbours.remove(a);
        }
        Ok(())
    }

    /// All vertices sharing an edge with `vertex`.
    ///
    /// Contains `vertex` itself only if the self-loop `{vertex, vertex}` exists.
    pub fn neighbours(&self, vertex: &V) -> GraphResult<BTreeSet<V>> {
        self.adjacent(vertex).cloned()
    }

    /// Number of neighbours of `vertex`. A self-loop counts once.
    pub fn degree(&self, vertex: &V) -> GraphResult<usize> {
        self.adjacent(vertex).map(BTreeSet::len)
    }

    /// Borrowed neighbour set, the primitive the traversals expand with.
    pub(crate) fn adjacent(&self, vertex: &V) -> GraphResult<&BTreeSet<V>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::not_found(vertex))
    }

    /// Human-readable vertex and edge counts.
    pub fn summary(&self) -> String {
        let vertices = self.vertices.len();
        let edges = self.edges.len();
        format!(
            "Graph composed of {} {} and {} {}",
            vertices,
            if vertices == 1 { "vertex" } else { "vertices" },
            edges,
            if edges == 1 { "edge" } else { "edges" },
        )
    }

    fn link(&mut self, from: &V, to: &V) {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
    }
}

impl<V: Ord + Clone + fmt::Debug> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + Clone + fmt::Debug> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
