//! Fluent API for building Graph instances.

use std::fmt;

use crate::config::{GraphConfig, SelfLoopPolicy};
use crate::types::GraphResult;

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Calls are recorded and replayed through the checked `Graph` API in
/// `build()`, so an edge naming an undeclared vertex fails there with
/// `GraphError::NotFound`.
pub struct GraphBuilder<V> {
    config: GraphConfig,
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Ord + Clone + fmt::Debug> GraphBuilder<V> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder with a specific configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Set the self-loop policy.
    pub fn self_loops(&mut self, policy: SelfLoopPolicy) -> &mut Self {
        self.config.self_loops = policy;
        self
    }

    /// Declare a vertex.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Declare several vertices.
    pub fn vertices<I>(&mut self, vertices: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        self.vertices.extend(vertices);
        self
    }

    /// Add an edge between two declared vertices.
    pub fn edge(&mut self, a: V, b: V) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Build the final Graph.
    pub fn build(&self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::with_config(self.config.clone());
        graph.add_vertices(self.vertices.iter().cloned());
        for (a, b) in &self.edges {
            graph.add_edge(a.clone(), b.clone())?;
        }
        Ok(graph)
    }
}

impl<V: Ord + Clone + fmt::Debug> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GraphError;

    #[test]
    fn test_build_path() {
        let graph = GraphBuilder::new()
            .vertices(["A", "B", "C"])
            .edge("A", "B")
            .edge("B", "C")
            .build()
            .unwrap();
        assert_eq!(graph.summary(), "Graph composed of 3 vertices and 2 edges");
    }

    #[test]
    fn test_undeclared_vertex() {
        let result = GraphBuilder::new().vertex(1).edge(1, 2).build();
        assert!(matches!(result, Err(GraphError::NotFound(v)) if v == "2"));
    }

    #[test]
    fn test_reject_self_loops() {
        let result = GraphBuilder::new()
            .self_loops(SelfLoopPolicy::Reject)
            .vertex('x')
            .edge('x', 'x')
            .build();
        assert!(matches!(result, Err(GraphError::SelfLoop(_))));
    }
}
