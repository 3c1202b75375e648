//! 2D sizes.

use std::fmt;

use glam::DVec2;

use crate::errors::{Result, check_finite};
use crate::fmt::fmt_num;

/// A width and a height.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    #[inline]
    pub const fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }

    /// Create a size with validation (rejects NaN/infinite)
    pub fn try_new(w: f64, h: f64) -> Result<Self> {
        Ok(Size {
            w: check_finite("w", w)?,
            h: check_finite("h", h)?,
        })
    }

    /// True if both extents are zero
    #[inline]
    pub fn is_zero(self) -> bool {
        self.w == 0.0 && self.h == 0.0
    }

    /// True if either extent is zero
    #[inline]
    pub fn is_empty(self) -> bool {
        self.w == 0.0 || self.h == 0.0
    }

    #[inline]
    pub fn area(self) -> f64 {
        self.w * self.h
    }

    /// Width over height. Follows IEEE division when the height is zero.
    #[inline]
    pub fn ratio(self) -> f64 {
        self.w / self.h
    }
}

impl From<DVec2> for Size {
    fn from(v: DVec2) -> Self {
        Size { w: v.x, h: v.y }
    }
}

impl From<Size> for DVec2 {
    fn from(s: Size) -> Self {
        DVec2::new(s.w, s.h)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", fmt_num(self.w), fmt_num(self.h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_stricter_than_empty() {
        let strip = Size::new(0.0, 3.0);
        assert!(strip.is_empty());
        assert!(!strip.is_zero());

        assert!(Size::ZERO.is_empty());
        assert!(Size::ZERO.is_zero());

        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn area_and_ratio() {
        let s = Size::new(4.0, 2.0);
        assert_eq!(s.area(), 8.0);
        assert_eq!(s.ratio(), 2.0);
        assert!(Size::new(1.0, 0.0).ratio().is_infinite());
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Size::try_new(1.0, 2.0).is_ok());
        assert!(Size::try_new(f64::INFINITY, 2.0).is_err());
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(Size::new(1.0, 2.5), @"[1, 2.5]");
        insta::assert_snapshot!(Size::new(1e7, 0.0), @"[1e+07, 0]");
    }
}
