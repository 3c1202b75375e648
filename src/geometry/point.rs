//! 2D coordinates.

use std::fmt;

use glam::DVec2;

use crate::errors::{Result, check_finite};
use crate::fmt::fmt_num;

/// A 2D position. Equality is exact, there is no epsilon.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a point with validation (rejects NaN/infinite)
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        Ok(Point {
            x: check_finite("x", x)?,
            y: check_finite("y", y)?,
        })
    }

    /// True if both coordinates are zero
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Translate into the coordinate system rooted at `origin`.
    #[inline]
    pub fn with_origin(self, origin: Point) -> Point {
        Point {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", fmt_num(self.x), fmt_num(self.y))
    }
}
