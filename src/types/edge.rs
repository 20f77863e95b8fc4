//! The undirected edge: an unordered pair of vertices.

use std::fmt;

use serde::Serialize;

/// An undirected edge between two vertices.
///
/// The endpoints are stored normalized (smaller first), so `Edge::new(a, b)`
/// and `Edge::new(b, a)` compare, hash and order identically. Both endpoints
/// may be the same vertex (a self-loop).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge<V> {
    low: V,
    high: V,
}

impl<V: Ord> Edge<V> {
    /// Create an edge from two endpoints in any order.
    pub fn new(a: V, b: V) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Both endpoints, smaller first.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.low, &self.high)
    }

    /// True when both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }

    /// The endpoint opposite `vertex`, or None if `vertex` is not an endpoint.
    pub fn other(&self, vertex: &V) -> Option<&V> {
        if &self.low == vertex {
            Some(&self.high)
        } else if &self.high == vertex {
            Some(&self.low)
        } else {
            None
        }
    }
}

impl<V: fmt::Debug> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}, {:?}}}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_independent() {
        assert_eq!(Edge::new("b", "a"), Edge::new("a", "b"));
        assert_eq!(Edge::new(3, 1).endpoints(), (&1, &3));
    }

    #[test]
    fn test_other_endpoint() {
        let edge = Edge::new(1, 2);
        assert_eq!(edge.other(&1), Some(&2));
        assert_eq!(edge.other(&2), Some(&1));
        assert_eq!(edge.other(&3), None);

        let self_loop = Edge::new(4, 4);
        assert!(self_loop.is_self_loop());
        assert_eq!(self_loop.other(&4), Some(&4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::new("b", "a").to_string(), "{\"a\", \"b\"}");
    }
}
