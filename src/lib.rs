//! 2D geometry primitives for toolkit layout and rendering code.
//!
//! - [`Point`], [`Size`], [`Rect`] and [`Margin`] are plain `Copy` values.
//! - [`Path`] records drawing commands and keeps every sub-figure starting
//!   with a move-to.
//! - [`merge_rect`] and [`DirtyRegion`] keep a short list of rectangles that
//!   need a redraw.
//!
//! ```
//! use tkgeom::{DirtyRegion, Point, Rect, Shape};
//!
//! let mut dirty = DirtyRegion::new();
//! dirty.add(Rect::new(0.0, 0.0, 2.0, 2.0));
//! dirty.add(Rect::new(1.0, 1.0, 2.0, 2.0));
//! assert_eq!(dirty.rects(), &[Rect::new(0.0, 0.0, 3.0, 3.0)]);
//!
//! let outline = dirty.rects()[0].path();
//! assert_eq!(outline.len(), 5);
//! assert_eq!(outline.last_point(), Point::new(0.0, 3.0));
//! ```
//!
//! Enable the `tracing` feature to get debug events from path repair and
//! region merging.

pub mod errors;
pub mod fmt;
pub mod geometry;
pub mod log;
pub mod path;
pub mod region;
pub mod shape;

pub use errors::{GeomError, Result};
pub use geometry::{Margin, Point, Rect, Size, center_rect};
pub use path::{Path, PathElement, PathElementKind};
pub use region::{DirtyRegion, merge_rect};
pub use shape::{AnyShape, Shape, shapes_to_path};
