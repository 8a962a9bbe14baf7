//! Line algebra in general form `a·x + b·y + c = 0`.
//!
//! Coefficients are renormalized after every construction and mutation by
//! dividing through `max(|a|, |b|, |c|, EPS)`, which bounds their magnitude
//! and guards the degenerate all-zero line.

use super::GeometryError;

/// Magnitude guard for normalization and parallelism tests.
const EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    fn normalized(a: f64, b: f64, c: f64) -> Self {
        let m = a.abs().max(b.abs()).max(c.abs()).max(EPS);
        Self {
            a: a / m,
            b: b / m,
            c: c / m,
        }
    }

    /// Line through two points.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::from_point_dir(x1, y1, x2 - x1, y2 - y1)
    }

    /// Line through `(x, y)` with direction vector `(dx, dy)`.
    pub fn from_point_dir(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        let a = dy;
        let b = -dx;
        let c = -(a * x + b * y);
        Self::normalized(a, b, c)
    }

    /// Line through `(x, y)` with slant angle `theta`, i.e. direction
    /// `(cos theta, sin theta)`.
    pub fn from_point_angle(x: f64, y: f64, theta: f64) -> Self {
        Self::from_point_dir(x, y, theta.cos(), theta.sin())
    }

    /// X coordinate of the line at height `y`. Degenerate for lines
    /// parallel to the x axis.
    pub fn x_at(&self, y: f64) -> Result<f64, GeometryError> {
        if self.a.abs() < EPS {
            return Err(GeometryError::AxisParallel('x'));
        }
        Ok(-(self.b * y + self.c) / self.a)
    }

    /// Y coordinate of the line at `x`. Degenerate for lines parallel to
    /// the y axis.
    pub fn y_at(&self, x: f64) -> Result<f64, GeometryError> {
        if self.b.abs() < EPS {
            return Err(GeometryError::AxisParallel('y'));
        }
        Ok(-(self.a * x + self.c) / self.b)
    }

    /// Intersection point of two lines via Cramer's rule.
    pub fn cross_point(&self, other: &Line) -> Result<(f64, f64), GeometryError> {
        let det = self.a * other.b - other.a * self.b;
        if det.abs() < EPS {
            return Err(GeometryError::ParallelLines);
        }
        let x = (self.b * other.c - other.b * self.c) / det;
        let y = (other.a * self.c - self.a * other.c) / det;
        Ok((x, y))
    }

    /// Perpendicular distance from a point.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.a * x + self.b * y + self.c).abs() / (self.a * self.a + self.b * self.b).sqrt()
    }

    pub fn parallel_to(&self, other: &Line) -> bool {
        (self.a * other.b - other.a * self.b).abs() < EPS
    }

    /// Slant angle in `(-pi, pi]`.
    pub fn slant_angle(&self) -> f64 {
        (-self.a).atan2(self.b)
    }

    /// Translate the line so it passes through `(x, y)`, keeping its
    /// direction.
    pub fn move_to_point(&mut self, x: f64, y: f64) {
        let c = -(self.a * x + self.b * y);
        *self = Self::normalized(self.a, self.b, c);
    }

    /// True when the line lies left of the point at the point's height.
    /// False for lines parallel to the x axis.
    pub fn left_to(&self, x: f64, y: f64) -> bool {
        self.x_at(y).map(|lx| lx < x).unwrap_or(false)
    }

    /// True when the line lies right of the point at the point's height.
    pub fn right_to(&self, x: f64, y: f64) -> bool {
        self.x_at(y).map(|lx| lx > x).unwrap_or(false)
    }

    /// True when the line's y at the point's abscissa exceeds the point's
    /// y. False for lines parallel to the y axis.
    pub fn above_to(&self, x: f64, y: f64) -> bool {
        self.y_at(x).map(|ly| ly > y).unwrap_or(false)
    }

    /// True when the line's y at the point's abscissa falls short of the
    /// point's y.
    pub fn below_to(&self, x: f64, y: f64) -> bool {
        self.y_at(x).map(|ly| ly < y).unwrap_or(false)
    }
}
