//! Text input for graphs.

pub mod edge_list;

pub use edge_list::EdgeListReader;
