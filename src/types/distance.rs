//! Hop-count distances with an explicit infinite sentinel.

use std::fmt;

use serde::Serialize;

/// Combinatorial distance between two vertices.
///
/// `Infinite` marks an unreachable target. Variant order makes every finite
/// distance compare less than `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Distance {
    /// Number of edges on a shortest path.
    Finite(usize),
    /// No path exists.
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// The hop count, or None when infinite.
    pub fn finite(&self) -> Option<usize> {
        match self {
            Self::Finite(d) => Some(*d),
            Self::Infinite => None,
        }
    }
}

impl From<Option<usize>> for Distance {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::Infinite, Self::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Infinite => write!(f, "inf"),
        }
    }
}
