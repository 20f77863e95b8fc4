//! CLI command implementations.

use std::path::Path;

use crate::config::{GraphConfig, OutputFormat};
use crate::format::EdgeListReader;
use crate::graph::{DistanceTree, Graph};
use crate::types::{Distance, GraphResult};

fn load(path: &Path, config: &GraphConfig) -> GraphResult<Graph<String>> {
    EdgeListReader::read_from_file(path, config)
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_tree(tree: &DistanceTree<String>) {
    for (vertex, distance) in tree.iter() {
        println!("{}\t{}", vertex, distance);
    }
}

/// Display the summary and counts of an edge-list file.
pub fn cmd_info(path: &Path, config: &GraphConfig, format: OutputFormat) -> GraphResult<()> {
    let graph = load(path, config)?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "summary": graph.summary(),
        })),
        OutputFormat::Text => {
            println!("File: {}", path.display());
            println!("{}", graph);
            println!("Vertices: {}", graph.vertex_count());
            println!("Edges: {}", graph.edge_count());
        }
    }
    Ok(())
}

/// List the neighbours of a vertex.
pub fn cmd_neighbours(
    path: &Path,
    vertex: &str,
    config: &GraphConfig,
    format: OutputFormat,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let vertex = vertex.to_string();
    let neighbours = graph.neighbours(&vertex)?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "vertex": vertex,
            "neighbours": neighbours,
        })),
        OutputFormat::Text => {
            for neighbour in &neighbours {
                println!("{}", neighbour);
            }
        }
    }
    Ok(())
}

/// Print the distance between two vertices, `inf` when unreachable.
pub fn cmd_distance(
    path: &Path,
    start: &str,
    target: &str,
    config: &GraphConfig,
    format: OutputFormat,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let (start, target) = (start.to_string(), target.to_string());
    let distance = graph.graph_distance(&start, &target)?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "start": start,
            "target": target,
            "distance": distance,
        })),
        OutputFormat::Text => println!("{}", distance),
    }
    Ok(())
}

/// Print the BFS distance tree towards a target, `inf` when unreachable.
pub fn cmd_tree(
    path: &Path,
    start: &str,
    target: &str,
    config: &GraphConfig,
    format: OutputFormat,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let (start, target) = (start.to_string(), target.to_string());
    let tree = graph.distance_tree(&start, &target)?;

    match (format, tree) {
        (OutputFormat::Json, Some(tree)) => print_json(&serde_json::json!({
            "start": start,
            "target": target,
            "tree": tree,
        })),
        (OutputFormat::Json, None) => print_json(&serde_json::json!({
            "start": start,
            "target": target,
            "distance": Distance::Infinite,
        })),
        (OutputFormat::Text, Some(tree)) => print_tree(&tree),
        (OutputFormat::Text, None) => println!("{}", Distance::Infinite),
    }
    Ok(())
}

/// Print a shortest path between two vertices.
pub fn cmd_path(
    path: &Path,
    start: &str,
    target: &str,
    config: &GraphConfig,
    format: OutputFormat,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let shortest = graph.shortest_path(&start.to_string(), &target.to_string())?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "start": start,
            "target": target,
            "distance": shortest.len() - 1,
            "path": shortest,
        })),
        OutputFormat::Text => println!("{}", shortest.join(" -> ")),
    }
    Ok(())
}

/// Print the full distance tree of a vertex's connected component.
pub fn cmd_reach(
    path: &Path,
    start: &str,
    config: &GraphConfig,
    format: OutputFormat,
) -> GraphResult<()> {
    let graph = load(path, config)?;
    let tree = graph.reachable_from(&start.to_string())?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "start": start,
            "reached": tree.len(),
            "eccentricity": tree.eccentricity(),
            "tree": tree,
        })),
        OutputFormat::Text => print_tree(&tree),
    }
    Ok(())
}
