//! Plain 2D value types.
//!
//! All of these are `Copy` records with pure arithmetic helpers. Only the
//! explicit setters on [`Rect`] mutate a value.

pub mod margin;
pub mod point;
pub mod rect;
pub mod size;

pub use margin::Margin;
pub use point::Point;
pub use rect::{Rect, center_rect};
pub use size::Size;
