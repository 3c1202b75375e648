//! Margins around a rectangular area.

use std::fmt;

use super::{Point, Rect, Size};
use crate::fmt::fmt_g;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margin {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Margin {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The same margin on all four sides.
    pub const fn uniform(m: f64) -> Self {
        Margin::new(m, m, m, m)
    }

    /// Apply the margin to the top-left corner of an area.
    pub fn top_left(self, p: Point) -> Point {
        Point::new(p.x + self.left, p.y + self.top)
    }

    /// Apply the margin to the bottom-right corner of an area.
    pub fn bottom_right(self, p: Point) -> Point {
        Point::new(p.x - self.right, p.y - self.bottom)
    }

    pub fn grow_rect(self, r: Rect) -> Rect {
        Rect {
            x: r.x - self.left,
            y: r.y - self.top,
            w: r.w + self.width(),
            h: r.h + self.height(),
        }
    }

    /// Inverse of [`Margin::grow_rect`].
    ///
    /// An axis that would end up with a negative extent collapses to zero,
    /// positioned on the center of the original rectangle along that axis.
    pub fn shrink_rect(self, r: Rect) -> Rect {
        let mut s = Rect {
            x: r.x + self.left,
            y: r.y + self.top,
            w: r.w - self.width(),
            h: r.h - self.height(),
        };

        if s.w < 0.0 {
            s.x = r.x + r.w / 2.0;
            s.w = 0.0;
        }

        if s.h < 0.0 {
            s.y = r.y + r.h / 2.0;
            s.h = 0.0;
        }

        s
    }

    pub fn grow_size(self, s: Size) -> Size {
        Size::new(s.w + self.width(), s.h + self.height())
    }

    /// Each extent is clamped at zero.
    pub fn shrink_size(self, s: Size) -> Size {
        Size::new(
            (s.w - self.width()).max(0.0),
            (s.h - self.height()).max(0.0),
        )
    }

    /// Horizontal total (left + right)
    #[inline]
    pub fn width(self) -> f64 {
        self.left + self.right
    }

    /// Vertical total (top + bottom)
    #[inline]
    pub fn height(self) -> f64 {
        self.top + self.bottom
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "margin {{ top = {}, bottom = {}, left = {}, right = {} }}",
            fmt_g(self.top, None),
            fmt_g(self.bottom, None),
            fmt_g(self.left, None),
            fmt_g(self.right, None)
        )
    }
}
