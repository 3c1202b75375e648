//! Conversion of geometric values into paths.

use enum_dispatch::enum_dispatch;

use crate::geometry::Rect;
use crate::path::Path;

/// Common behavior for everything that can be drawn as a path
#[enum_dispatch]
pub trait Shape {
    /// A path outlining the shape.
    ///
    /// The caller owns the returned path and may modify it freely; it never
    /// shares storage with the shape.
    fn path(&self) -> Path;
}

/// Rectangles become a closed four-corner polygon (5 elements).
impl Shape for Rect {
    fn path(&self) -> Path {
        Path::with_capacity(5).append_rect(*self)
    }
}

impl Shape for Path {
    fn path(&self) -> Path {
        self.copy()
    }
}

/// Any concrete shape, for heterogeneous lists.
#[enum_dispatch(Shape)]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Rect,
    Path,
}

/// Concatenate the paths of several shapes, in order.
pub fn shapes_to_path<S: Shape>(shapes: &[S]) -> Path {
    shapes
        .iter()
        .fold(Path::new(), |acc, shape| acc.append_path(&shape.path()))
}
