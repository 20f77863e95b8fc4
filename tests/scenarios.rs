//! End-to-end scenarios over the public Graph API.

use std::collections::BTreeSet;

use pathgraph::{Distance, Graph, GraphBuilder, GraphError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn abc() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph.add_vertices(["A", "B", "C"]);
    graph
}

// ==================== Storage ====================

#[test]
fn test_empty_graph_summary() {
    let graph: Graph<String> = Graph::new();
    assert_eq!(graph.summary(), "Graph composed of 0 vertices and 0 edges");
    assert!(graph.is_empty());
}

#[test]
fn test_add_twice_leaves_counts_unchanged() {
    let mut graph = abc();
    graph.add_edge("A", "B").unwrap();
    let before = (graph.vertex_count(), graph.edge_count());

    graph.add_vertex("A");
    graph.add_edge("A", "B").unwrap();
    graph.add_edge("B", "A").unwrap();
    assert_eq!((graph.vertex_count(), graph.edge_count()), before);
}

#[test]
fn test_unknown_endpoint_leaves_edges_unmodified() {
    let mut graph = abc();
    graph.add_edge("A", "B").unwrap();
    let edges_before: Vec<_> = graph.edges().cloned().collect();

    let err = graph.add_edge("C", "nowhere").unwrap_err();
    assert_eq!(err.to_string(), "Vertex \"nowhere\" is not in the graph");
    let edges_after: Vec<_> = graph.edges().cloned().collect();
    assert_eq!(edges_before, edges_after);
}

// ==================== Queries ====================

#[test]
fn test_path_of_three() {
    init_logging();
    let mut graph = abc();
    graph.add_edge("A", "B").unwrap();
    graph.add_edge("B", "C").unwrap();

    assert_eq!(
        graph.neighbours(&"B").unwrap(),
        BTreeSet::from(["A", "C"])
    );
    assert_eq!(graph.graph_distance(&"A", &"C").unwrap(), Distance::Finite(2));
    assert_eq!(graph.shortest_path(&"A", &"C").unwrap(), vec!["A", "B", "C"]);

    let tree = graph.distance_tree(&"A", &"C").unwrap().unwrap();
    let entries: Vec<_> = tree.iter().collect();
    assert_eq!(entries, vec![(&"A", 0), (&"B", 1), (&"C", 2)]);
}

#[test]
fn test_no_edges_means_not_connected() {
    init_logging();
    let graph = abc();
    assert_eq!(graph.graph_distance(&"A", &"C").unwrap(), Distance::Infinite);
    match graph.shortest_path(&"A", &"C") {
        Err(GraphError::NotConnected { start, target }) => {
            assert_eq!(start, "\"A\"");
            assert_eq!(target, "\"C\"");
        }
        other => panic!("Expected NotConnected, got {:?}", other),
    }
}

#[test]
fn test_single_vertex_path_to_itself() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    assert_eq!(graph.graph_distance(&"A", &"A").unwrap(), Distance::Finite(0));
    assert_eq!(graph.shortest_path(&"A", &"A").unwrap(), vec!["A"]);
}

#[test]
fn test_remove_then_remove_again() {
    let mut graph = abc();
    graph.add_edge("A", "B").unwrap();
    graph.remove_edge(&"A", &"B").unwrap();
    assert!(graph.neighbours(&"A").unwrap().is_empty());
    assert!(matches!(
        graph.remove_edge(&"A", &"B"),
        Err(GraphError::EdgeNotFound { .. })
    ));
}

#[test]
fn test_shortest_path_unknown_vertex() {
    let graph = abc();
    assert!(matches!(
        graph.shortest_path(&"A", &"Z"),
        Err(GraphError::NotFound(_))
    ));
    assert!(matches!(
        graph.distance_tree(&"Z", &"A"),
        Err(GraphError::NotFound(_))
    ));
}

#[test]
fn test_removed_edge_disconnects() {
    let mut graph = GraphBuilder::new()
        .vertices(1..=4)
        .edge(1, 2)
        .edge(2, 3)
        .edge(3, 4)
        .build()
        .unwrap();
    assert_eq!(graph.graph_distance(&1, &4).unwrap(), Distance::Finite(3));

    graph.remove_edge(&3, &2).unwrap();
    assert_eq!(graph.graph_distance(&1, &4).unwrap(), Distance::Infinite);
    assert_eq!(graph.reachable_from(&4).unwrap().len(), 2);
}

#[test]
fn test_tuple_vertices() {
    // Grid coordinates as vertex identifiers.
    let mut graph = Graph::new();
    for x in 0..3 {
        for y in 0..3 {
            graph.add_vertex((x, y));
        }
    }
    for x in 0..3 {
        for y in 0..3 {
            if x + 1 < 3 {
                graph.add_edge((x, y), (x + 1, y)).unwrap();
            }
            if y + 1 < 3 {
                graph.add_edge((x, y), (x, y + 1)).unwrap();
            }
        }
    }
    assert_eq!(graph.edge_count(), 12);
    let path = graph.shortest_path(&(0, 0), &(2, 2)).unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path.first(), Some(&(0, 0)));
    assert_eq!(path.last(), Some(&(2, 2)));
}
