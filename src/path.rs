//! Vector paths.
//!
//! A [`Path`] is an append-only list of drawing commands. Every sub-figure of
//! a path starts with a move-to; the path enforces this itself instead of
//! rejecting commands.
//!
//! # Sub-figure states
//!
//! - **Start**: the path is empty.
//! - **Open**: the last element is a move-to, line-to or curve.
//! - **Closed**: the last element is a close-path.
//!
//! A line or curve issued from `Start` or `Closed` first inserts a move-to at
//! the current pen position ([`Path::last_point`]), which is the zero point on
//! an empty path. A move-to is legal in every state. A close-path is always
//! appended as is, so closing an empty or already closed path just records
//! another close marker.

use std::fmt;

use crate::errors::{GeomError, Result};
use crate::geometry::{Point, Rect};
use crate::log::debug;

/// The kind of a [`PathElement`], without its points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathElementKind {
    MoveTo,
    LineTo,
    QuadCurveTo,
    CubicCurveTo,
    ClosePath,
}

impl fmt::Display for PathElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathElementKind::MoveTo => "move-to",
            PathElementKind::LineTo => "line-to",
            PathElementKind::QuadCurveTo => "quad-curve-to",
            PathElementKind::CubicCurveTo => "cubic-curve-to",
            PathElementKind::ClosePath => "close-path",
        };
        f.write_str(name)
    }
}

/// A single drawing command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathElement {
    /// Move the pen without drawing.
    MoveTo(Point),
    /// Straight line to a point.
    LineTo(Point),
    /// Quadratic curve to `end` with one control point.
    QuadCurveTo { control: Point, end: Point },
    /// Cubic curve to `end` with two control points.
    CubicCurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Terminate the current sub-figure.
    ClosePath,
}

impl PathElement {
    /// The element's kind, without its points.
    pub fn kind(&self) -> PathElementKind {
        match self {
            PathElement::MoveTo(_) => PathElementKind::MoveTo,
            PathElement::LineTo(_) => PathElementKind::LineTo,
            PathElement::QuadCurveTo { .. } => PathElementKind::QuadCurveTo,
            PathElement::CubicCurveTo { .. } => PathElementKind::CubicCurveTo,
            PathElement::ClosePath => PathElementKind::ClosePath,
        }
    }

    /// The element's points in a fixed three-slot layout.
    ///
    /// Meaningful points come first in drawing order (controls, then the
    /// end point). Unused slots hold the zero point.
    pub fn points(&self) -> [Point; 3] {
        let z = Point::ZERO;
        match *self {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => [p, z, z],
            PathElement::QuadCurveTo { control, end } => [control, end, z],
            PathElement::CubicCurveTo {
                control1,
                control2,
                end,
            } => [control1, control2, end],
            PathElement::ClosePath => [z, z, z],
        }
    }

    /// Where the pen is after this element, if the element carries a point.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathElement::MoveTo(p) | PathElement::LineTo(p) => Some(p),
            PathElement::QuadCurveTo { end, .. } | PathElement::CubicCurveTo { end, .. } => {
                Some(end)
            }
            PathElement::ClosePath => None,
        }
    }
}

/// State of the sub-figure at the end of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FigureState {
    Start,
    Open,
    Closed,
}

/// An ordered list of drawing commands.
///
/// Cloning produces an independent list; cloning an empty path does not
/// allocate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// An empty path without any storage.
    pub const fn new() -> Self {
        Path {
            elements: Vec::new(),
        }
    }

    /// An empty path with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// The recorded elements, in drawing order.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Iterate over the elements in drawing order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.elements.iter()
    }

    /// Number of elements, close markers included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if no element has been recorded.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements the path can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Start a new sub-figure at `p`. Legal in every state.
    pub fn move_to(&mut self, p: Point) {
        self.elements.push(PathElement::MoveTo(p));
    }

    /// Draw a straight line to `p`, inserting a move-to first if needed.
    ///
    /// ```
    /// use tkgeom::{Path, PathElement, Point};
    ///
    /// let mut p = Path::new();
    /// p.line_to(Point::new(1.0, 1.0));
    /// assert_eq!(p.elements()[0], PathElement::MoveTo(Point::ZERO));
    /// assert_eq!(p.len(), 2);
    /// ```
    pub fn line_to(&mut self, p: Point) {
        self.ensure_move_to();
        self.elements.push(PathElement::LineTo(p));
    }

    /// Draw a quadratic curve to `end`, inserting a move-to first if needed.
    pub fn quad_curve_to(&mut self, control: Point, end: Point) {
        self.ensure_move_to();
        self.elements.push(PathElement::QuadCurveTo { control, end });
    }

    /// Draw a cubic curve to `end`, inserting a move-to first if needed.
    pub fn cubic_curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.ensure_move_to();
        self.elements.push(PathElement::CubicCurveTo {
            control1,
            control2,
            end,
        });
    }

    /// Close the current sub-figure. Always appends.
    pub fn close(&mut self) {
        self.elements.push(PathElement::ClosePath);
    }

    /// Remove every element, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Independent copy of the path. Same as [`Clone::clone`].
    pub fn copy(&self) -> Path {
        Path {
            elements: self.elements.to_vec(),
        }
    }

    /// The current pen position.
    ///
    /// This is the end point of the last element that has one; close-path
    /// elements are skipped. An empty path yields the zero point.
    pub fn last_point(&self) -> Point {
        self.elements
            .iter()
            .rev()
            .find_map(PathElement::end_point)
            .unwrap_or(Point::ZERO)
    }

    /// Concatenate `other` after this path's elements.
    pub fn append_path(mut self, other: &Path) -> Path {
        self.elements.extend_from_slice(&other.elements);
        self
    }

    /// Append a closed polygon through `points`. Does nothing if `points` is
    /// empty.
    pub fn append_polygon(mut self, points: &[Point]) -> Path {
        if let Some((&first, rest)) = points.split_first() {
            self.elements.reserve(points.len() + 1);
            self.move_to(first);
            for &p in rest {
                self.line_to(p);
            }
            self.close();
        }
        self
    }

    /// Append a rectangle as a closed polygon.
    ///
    /// Corners go origin, then along the width, then to the tip, then back
    /// along the height (clockwise in a y-down space for positive extents).
    pub fn append_rect(self, r: Rect) -> Path {
        let (x0, y0) = (r.x, r.y);
        let (x1, y1) = (r.x + r.w, r.y + r.h);
        self.append_polygon(&[
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    fn figure_state(&self) -> FigureState {
        match self.elements.last() {
            None => FigureState::Start,
            Some(PathElement::ClosePath) => FigureState::Closed,
            Some(_) => FigureState::Open,
        }
    }

    /// Insert a move-to when a drawing command would otherwise start a
    /// sub-figure.
    fn ensure_move_to(&mut self) {
        let state = self.figure_state();
        if state == FigureState::Open {
            return;
        }

        let at = self.last_point();
        debug!(?state, x = at.x, y = at.y, "path: inserting implicit move-to");
        self.move_to(at);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Validate a raw element list.
///
/// Lines and curves must follow an open sub-figure: they cannot come first
/// or right after a close-path. Close-path markers are accepted anywhere,
/// matching [`Path::close`].
impl TryFrom<Vec<PathElement>> for Path {
    type Error = GeomError;

    fn try_from(elements: Vec<PathElement>) -> Result<Self> {
        let mut needs_move = true;

        for (index, element) in elements.iter().enumerate() {
            match element.kind() {
                PathElementKind::MoveTo => needs_move = false,
                PathElementKind::ClosePath => needs_move = true,
                found if needs_move => {
                    return Err(GeomError::MissingMoveTo { index, found });
                }
                _ => {}
            }
        }

        Ok(Path { elements })
    }
}
