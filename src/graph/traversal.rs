//! Graph traversal algorithms (BFS distances and shortest paths).

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use serde::Serialize;

use crate::types::{Distance, GraphError, GraphResult};

use super::Graph;

/// Distances from a start vertex to every vertex a BFS reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceTree<V: Ord> {
    start: V,
    distances: BTreeMap<V, usize>,
}

impl<V: Ord + Clone> DistanceTree<V> {
    fn seeded(start: V) -> Self {
        let mut distances = BTreeMap::new();
        distances.insert(start.clone(), 0);
        Self { start, distances }
    }

    /// The vertex the search started from.
    pub fn start(&self) -> &V {
        &self.start
    }

    /// Recorded distance to `vertex`, `Infinite` if the search never reached it.
    pub fn distance_to(&self, vertex: &V) -> Distance {
        self.distances.get(vertex).copied().into()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Number of reached vertices, including the start.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Always false: the start vertex is always present.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// (vertex, distance) pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, usize)> {
        self.distances.iter().map(|(v, &d)| (v, d))
    }

    /// Largest recorded distance.
    pub fn eccentricity(&self) -> usize {
        self.distances.values().copied().max().unwrap_or(0)
    }

    /// Vertices recorded at exactly `distance` hops.
    pub fn at_distance(&self, distance: usize) -> BTreeSet<&V> {
        self.distances
            .iter()
            .filter(|(_, &d)| d == distance)
            .map(|(v, _)| v)
            .collect()
    }
}

/// BFS from `start`. Stops as soon as `target` is marked, if one is given.
fn bfs<V>(graph: &Graph<V>, start: &V, target: Option<&V>) -> GraphResult<DistanceTree<V>>
where
    V: Ord + Clone + fmt::Debug,
{
    let mut tree = DistanceTree::seeded(start.clone());
    let mut queue: VecDeque<(V, usize)> = VecDeque::new();
    queue.push_back((start.clone(), 0));

    let mut stopped_early = target == Some(start);
    while !stopped_early {
        let Some((current, depth)) = queue.pop_front() else {
            break;
        };

        for neighbour in graph.adjacent(&current)? {
            if tree.distances.contains_key(neighbour) {
                continue;
            }
            tree.distances.insert(neighbour.clone(), depth + 1);
            if target == Some(neighbour) {
                stopped_early = true;
                break;
            }
            queue.push_back((neighbour.clone(), depth + 1));
        }
    }

    log::debug!(
        "BFS from {:?} reached {} of {} vertices (stopped early: {})",
        start,
        tree.len(),
        graph.vertex_count(),
        stopped_early
    );
    Ok(tree)
}

impl<V: Ord + Clone + fmt::Debug> Graph<V> {
    fn check_endpoints(&self, start: &V, target: &V) -> GraphResult<()> {
        if !self.contains_vertex(start) {
            return Err(GraphError::not_found(start));
        }
        if !self.contains_vertex(target) {
            return Err(GraphError::not_found(target));
        }
        Ok(())
    }

    /// Number of edges on a shortest path from `start` to `target`.
    ///
    /// Returns `Distance::Infinite` when `target` is unreachable.
    pub fn graph_distance(&self, start: &V, target: &V) -> GraphResult<Distance> {
        self.check_endpoints(start, target)?;
        Ok(bfs(self, start, Some(target))?.distance_to(target))
    }

    /// Distance tree of the BFS from `start` towards `target`.
    ///
    /// The search stops once `target` is reached, so vertices further away
    /// than `target` may be missing. Returns None when `target` is
    /// unreachable.
    pub fn distance_tree(&self, start: &V, target: &V) -> GraphResult<Option<DistanceTree<V>>> {
        self.check_endpoints(start, target)?;
        let tree = bfs(self, start, Some(target))?;
        Ok(tree.contains(target).then_some(tree))
    }

    /// Complete distance tree of the connected component containing `start`.
    pub fn reachable_from(&self, start: &V) -> GraphResult<DistanceTree<V>> {
        if !self.contains_vertex(start) {
            return Err(GraphError::not_found(start));
        }
        bfs(self, start, None)
    }

    /// True when a path joins `a` and `b`.
    pub fn is_connected_pair(&self, a: &V, b: &V) -> GraphResult<bool> {
        Ok(self.graph_distance(a, b)?.is_finite())
    }

    /// A shortest path from `start` to `target`, both included.
    ///
    /// Walks back from `target`, each step moving to the smallest neighbour
    /// one hop closer to `start`, so the result is deterministic.
    pub fn shortest_path(&self, start: &V, target: &V) -> GraphResult<Vec<V>> {
        let tree = self
            .distance_tree(start, target)?
            .ok_or_else(|| GraphError::not_connected(start, target))?;

        let mut cursor = target.clone();
        let mut remaining = tree.distances[target];
        let mut path = Vec::with_capacity(remaining + 1);
        path.push(cursor.clone());

        while remaining > 0 {
            let previous = self
                .adjacent(&cursor)?
                .iter()
                .find(|v| tree.distances.get(*v) == Some(&(remaining - 1)))
                .cloned()
                .ok_or_else(|| GraphError::not_connected(start, &cursor))?;
            log::trace!("path step {:?} <- {:?}", previous, cursor);
            path.push(previous.clone());
            cursor = previous;
            remaining -= 1;
        }

        path.reverse();
        Ok(path)
    }
}
