//! pathgraph — in-memory undirected graphs with BFS distance queries.
//!
//! Vertices are caller-chosen identifiers (`Ord + Clone + Debug`), edges are
//! unordered pairs. On top of the storage sit breadth-first distance,
//! distance-tree and shortest-path queries.

pub mod cli;
pub mod config;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{Config, ConfigSource, GraphConfig, OutputFormat, SelfLoopPolicy};
pub use format::EdgeListReader;
pub use graph::{DistanceTree, Graph, GraphBuilder};
pub use types::{Distance, Edge, GraphError, GraphResult};
