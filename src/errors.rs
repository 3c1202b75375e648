//! Error types with diagnostic codes using miette
//!
//! Geometric operations never fail: degenerate input yields a sentinel value.
//! These errors only come out of the validating constructors.

use miette::Diagnostic;
use thiserror::Error;

use crate::path::PathElementKind;

/// Result alias for the validating entry points of this crate
pub type Result<T, E = GeomError> = std::result::Result<T, E>;

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised by validating constructors
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeomError {
    #[error("{field} is not finite: {value}")]
    #[diagnostic(
        code(tkgeom::numeric::non_finite),
        help("coordinates and extents must be finite numbers")
    )]
    NonFinite { field: &'static str, value: f64 },

    #[error("path element {index} is a {found}, expected a move-to")]
    #[diagnostic(
        code(tkgeom::path::missing_move_to),
        help("a path and every sub-path following a close must start with a move-to")
    )]
    MissingMoveTo {
        index: usize,
        found: PathElementKind,
    },
}

/// Reject NaN and infinite values, naming the offending field.
pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeomError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn check_finite_accepts_regular_numbers() {
        assert_eq!(check_finite("x", 1.5), Ok(1.5));
        assert_eq!(check_finite("x", -0.0), Ok(-0.0));
    }

    #[test]
    fn check_finite_rejects_nan_and_infinity() {
        assert!(matches!(
            check_finite("w", f64::NAN),
            Err(GeomError::NonFinite { field: "w", .. })
        ));
        assert_eq!(
            check_finite("h", f64::INFINITY),
            Err(GeomError::NonFinite {
                field: "h",
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn missing_move_to_message_and_code() {
        let err = GeomError::MissingMoveTo {
            index: 3,
            found: PathElementKind::LineTo,
        };
        assert_eq!(
            err.to_string(),
            "path element 3 is a line-to, expected a move-to"
        );
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("tkgeom::path::missing_move_to"));
    }
}
