//! Logging shim over `tracing`.
//!
//! The crate emits two kinds of events:
//!
//! - `debug`: a path inserted an implicit move-to before a line or curve.
//! - `trace`: one event per rule applied by `merge_rect` (covered, merged,
//!   appended).
//!
//! With the `tracing` feature these are the `tracing` macros. Without it they
//! swallow their arguments, so call sites can use structured fields freely.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};

#[cfg(test)]
mod tests {
    use super::{debug, trace};
    use crate::geometry::Rect;

    #[test]
    fn macros_accept_structured_fields() {
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        let index = 3;
        debug!(%rect, x = rect.x, "path: inserting implicit move-to");
        trace!(?rect, index, len = 2, "merge_rect: merged with intersecting rect");
        trace!("plain message");
        assert_eq!(rect.w + index as f64, 4.0);
    }
}
