//! Reads plain-text edge lists into an in-memory graph.
//!
//! One entry per line. A single token declares an isolated vertex, two
//! whitespace-separated tokens declare both vertices and the edge between
//! them. Blank lines and lines starting with `#` are skipped.

use std::io::{BufRead, ErrorKind};
use std::path::Path;

use crate::config::GraphConfig;
use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Comment marker.
pub const COMMENT_PREFIX: char = '#';

/// Reader for edge-list text files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a Graph.
    pub fn read_from_file(path: &Path, config: &GraphConfig) -> GraphResult<Graph<String>> {
        let file = std::fs::File::open(path)?;
        let graph = Self::read_from(std::io::BufReader::new(file), config)?;
        log::debug!("Loaded {}: {}", path.display(), graph.summary());
        Ok(graph)
    }

    /// Read from any buffered reader into a Graph.
    pub fn read_from(reader: impl BufRead, config: &GraphConfig) -> GraphResult<Graph<String>> {
        let mut graph = Graph::with_config(config.clone());

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => GraphError::Parse {
                    line: idx + 1,
                    message: e.to_string(),
                },
                _ => GraphError::Io(e),
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [vertex] => {
                    graph.add_vertex((*vertex).to_string());
                }
                [a, b] => {
                    graph.add_vertex((*a).to_string());
                    graph.add_vertex((*b).to_string());
                    graph.add_edge((*a).to_string(), (*b).to_string())?;
                }
                _ => {
                    return Err(GraphError::Parse {
                        line: idx + 1,
                        message: format!("expected 1 or 2 vertices, found {}", tokens.len()),
                    });
                }
            }
        }

        Ok(graph)
    }
}
