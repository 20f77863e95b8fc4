//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use traversal::DistanceTree;
pub use undirected::Graph;
