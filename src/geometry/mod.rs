//! Pure geometry: points, rectangle algebra, line algebra.
//!
//! Everything in this module is a value type with no I/O and no shared
//! state. Rectangles live in image-space integer coordinates; lines are
//! kept in normalized general form.

mod bbox;
mod line;

pub use bbox::BBox;
pub use line::Line;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by degenerate geometry. Callers are expected to guard
/// known-degenerate inputs rather than rely on recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Two parallel lines have no intersection point.
    #[error("parallel lines do not intersect")]
    ParallelLines,
    /// The line does not constrain the requested coordinate.
    #[error("line is parallel to the {0} axis")]
    AxisParallel(char),
    /// Both boxes and their overlap have zero area, so IoU is 0/0.
    #[error("zero-area union, IoU undefined")]
    ZeroAreaUnion,
}

/// A 2D point, in image or display coordinates depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn dist_sq(&self, other: Point) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}
