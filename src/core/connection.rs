// src/core/connection.rs
use crate::core::types::{GridPoint, GRID_POINT_COUNT};
use std::cmp::Ordering;

/// An undirected link between two grid points.
///
/// The smaller index is always stored first, so `Connection::new(1, 0)` and
/// `Connection::new(0, 1)` are the same value. Ordering is lexicographic on
/// `(a, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Connection {
    a: GridPoint,
    b: GridPoint,
}

impl Connection {
    /// Builds the canonical pair. The range is not checked here; see [`Connection::is_valid`].
    pub fn new(p: GridPoint, q: GridPoint) -> Self {
        if p > q {
            Self { a: q, b: p }
        } else {
            Self { a: p, b: q }
        }
    }

    pub fn a(&self) -> GridPoint {
        self.a
    }

    pub fn b(&self) -> GridPoint {
        self.b
    }

    /// Distinct endpoints, both on the grid.
    pub fn is_valid(&self) -> bool {
        self.a < self.b && self.b < GRID_POINT_COUNT
    }

    pub fn compare(x: &Connection, y: &Connection) -> Ordering {
        x.cmp(y)
    }
}
