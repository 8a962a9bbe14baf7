//! Axis-aligned rectangle algebra.
//!
//! A box is stored as two arbitrary corners and never reordered in place;
//! every derived accessor is invariant under swapping `(x1, y1)` with
//! `(x2, y2)`. Width and height count pixels inclusively, so a box whose
//! corners coincide spans exactly one pixel.

use serde::{Deserialize, Serialize};

use super::{GeometryError, Point};

/// Axis-aligned box in integer coordinates, stored as two arbitrary
/// corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BBox {
    /// The canonical "unset" box. Any box with a negative coordinate
    /// reports `valid() == false`.
    pub const UNSET: BBox = BBox {
        x1: -1,
        y1: -1,
        x2: -1,
        y2: -1,
    };

    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box spanned by two corner points, in either order.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self::new(p1.x, p1.y, p2.x, p2.y)
    }

    /// True iff all four coordinates are non-negative.
    pub fn valid(&self) -> bool {
        self.x1.min(self.y1).min(self.x2).min(self.y2) >= 0
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x1.min(self.x2), self.y1.min(self.y2))
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x1.max(self.x2), self.y1.max(self.y2))
    }

    /// Inclusive pixel count along x.
    pub fn width(&self) -> i32 {
        (self.x1 - self.x2).abs() + 1
    }

    /// Inclusive pixel count along y.
    pub fn height(&self) -> i32 {
        (self.y1 - self.y2).abs() + 1
    }

    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x1 + self.x2) as f64 / 2.0,
            (self.y1 + self.y2) as f64 / 2.0,
        )
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width() as f64 / self.height() as f64
    }

    /// Inclusive boundary test. An unset box contains nothing.
    pub fn contains_point(&self, p: Point) -> bool {
        if !self.valid() {
            return false;
        }
        let tl = self.top_left();
        let br = self.bottom_right();
        tl.x <= p.x && p.x <= br.x && tl.y <= p.y && p.y <= br.y
    }

    /// True when `other` lies entirely inside `self`, boundaries included.
    pub fn contains_bbox(&self, other: &BBox) -> bool {
        other.valid() && self.contains_point(other.top_left()) && self.contains_point(other.bottom_right())
    }

    /// Overlap of two boxes, or [`BBox::UNSET`] when they are disjoint.
    pub fn intersect(&self, other: &BBox) -> BBox {
        let tl_x = self.top_left().x.max(other.top_left().x);
        let tl_y = self.top_left().y.max(other.top_left().y);
        let br_x = self.bottom_right().x.min(other.bottom_right().x);
        let br_y = self.bottom_right().y.min(other.bottom_right().y);
        if tl_x > br_x || tl_y > br_y {
            return BBox::UNSET;
        }
        BBox::new(tl_x, tl_y, br_x, br_y)
    }

    /// Intersection over union. Symmetric in its arguments; fails when the
    /// union area vanishes instead of fabricating a value.
    pub fn iou(&self, other: &BBox) -> Result<f64, GeometryError> {
        let inter = self.intersect(other);
        let inter_area = if inter.valid() { inter.area() } else { 0 };
        let union = self.area() + other.area() - inter_area;
        if union == 0 {
            return Err(GeometryError::ZeroAreaUnion);
        }
        Ok(inter_area as f64 / union as f64)
    }

    /// Same box shifted by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> BBox {
        BBox::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }

    /// All four coordinates multiplied by `scale`, rounded to nearest.
    pub fn increase(&self, scale: f64) -> BBox {
        BBox::new(
            scaled(self.x1, scale),
            scaled(self.y1, scale),
            scaled(self.x2, scale),
            scaled(self.y2, scale),
        )
    }

    /// All four coordinates divided by `scale`, rounded to nearest.
    pub fn decrease(&self, scale: f64) -> BBox {
        self.increase(1.0 / scale)
    }
}

impl Default for BBox {
    fn default() -> Self {
        Self::UNSET
    }
}

fn scaled(v: i32, scale: f64) -> i32 {
    (v as f64 * scale).round() as i32
}
