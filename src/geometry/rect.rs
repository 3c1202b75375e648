//! Axis-aligned rectangles.
//!
//! A [`Rect`] is an origin plus a size. The size may be negative, which
//! describes a rectangle that has not been normalized yet; [`Rect::abs`]
//! flips such extents back. Every derived value (intersection, union,
//! containment of points) is computed on normalized copies.

use std::fmt;

use glam::DVec2;

use super::{Margin, Point, Size};
use crate::errors::{Result, check_finite};
use crate::fmt::fmt_num;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 0.0,
        h: 0.0,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// Build a rectangle from its origin and dimensions.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Rect {
            x: origin.x,
            y: origin.y,
            w: size.w,
            h: size.h,
        }
    }

    /// Create a rectangle with validation (rejects NaN/infinite)
    pub fn try_new(x: f64, y: f64, w: f64, h: f64) -> Result<Self> {
        Ok(Rect {
            x: check_finite("x", x)?,
            y: check_finite("y", y)?,
            w: check_finite("w", w)?,
            h: check_finite("h", h)?,
        })
    }

    pub fn set_origin(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    pub fn set_size(&mut self, s: Size) {
        self.w = s.w;
        self.h = s.h;
    }

    /// Grow in place by the given margin.
    pub fn grow(&mut self, m: Margin) {
        *self = m.grow_rect(*self);
    }

    /// Shrink in place by the given margin, clamping at zero extent.
    pub fn shrink(&mut self, m: Margin) {
        *self = m.shrink_rect(*self);
    }

    #[inline]
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.w, self.h)
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// The corner opposite to the origin (origin + size).
    #[inline]
    pub fn tip(self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }

    /// Normalize negative extents by moving the origin. Idempotent.
    pub fn abs(mut self) -> Rect {
        if self.w < 0.0 {
            self.x += self.w;
            self.w = -self.w;
        }
        if self.h < 0.0 {
            self.y += self.h;
            self.h = -self.h;
        }
        self
    }

    /// Area covered by both rectangles, or [`Rect::ZERO`] if they don't overlap.
    ///
    /// Rectangles sharing an edge produce a zero-width (or zero-height) strip,
    /// which [`Rect::is_empty`] reports as empty.
    pub fn intersect(self, other: Rect) -> Rect {
        let (a, b) = (self.abs(), other.abs());

        let lo = DVec2::from(a.origin()).max(b.origin().into());
        let hi = DVec2::from(a.tip()).min(b.tip().into());

        if lo.x > hi.x || lo.y > hi.y {
            return Rect::ZERO;
        }

        Rect::from_origin_size(lo.into(), (hi - lo).into())
    }

    /// Smallest rectangle covering both, whether or not they intersect.
    pub fn merge(self, other: Rect) -> Rect {
        let (a, b) = (self.abs(), other.abs());

        let lo = DVec2::from(a.origin()).min(b.origin().into());
        let hi = DVec2::from(a.tip()).max(b.tip().into());

        Rect::from_origin_size(lo.into(), (hi - lo).into())
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.origin().is_zero() && self.size().is_zero()
    }

    /// True if the width or the height is zero.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.size().is_empty()
    }

    #[inline]
    pub fn area(self) -> f64 {
        self.size().area()
    }

    /// Origin is inclusive, far edges are exclusive.
    pub fn contains_point(self, p: Point) -> bool {
        self.x <= p.x && (self.x + self.w) > p.x && self.y <= p.y && (self.y + self.h) > p.y
    }

    /// True if `other` lies entirely within this rectangle (edges may touch).
    pub fn contains_rect(self, other: Rect) -> bool {
        self.x <= other.x
            && (self.x + self.w) >= (other.x + other.w)
            && self.y <= other.y
            && (self.y + self.h) >= (other.y + other.h)
    }
}

/// Position `inner` at the center of `outer`, keeping `inner`'s size.
pub fn center_rect(outer: Rect, inner: Rect) -> Rect {
    Rect {
        x: outer.x + (outer.w / 2.0 - inner.w / 2.0),
        y: outer.y + (outer.h / 2.0 - inner.h / 2.0),
        w: inner.w,
        h: inner.h,
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ {}, {}, {}, {} }}",
            fmt_num(self.x),
            fmt_num(self.y),
            fmt_num(self.w),
            fmt_num(self.h)
        )
    }
}
