//! All data types for the pathgraph library.

pub mod distance;
pub mod edge;
pub mod error;

pub use distance::Distance;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
