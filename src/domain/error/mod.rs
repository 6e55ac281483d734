// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! [`GeoError`] is the single failure type of the extent and projection
//! engine. Every variant is returned to the immediate caller; none of them is
//! fatal and none is retried internally.

use thiserror::Error;

/// Errors raised by angle arithmetic, extent tracking and projection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// An extent was requested for an empty point set.
    #[error("no points supplied")]
    EmptyInput,

    /// Two angles with a different number of components were compared or
    /// subtracted.
    #[error("angle arity mismatch: {left} components against {right}")]
    ArityMismatch {
        /// Component count of the left-hand angle.
        left: usize,
        /// Component count of the right-hand angle.
        right: usize,
    },

    /// A sexagesimal borrow ran past the most significant (degrees) position.
    #[error("sexagesimal borrow underflowed past the degrees component")]
    Underflow,

    /// The bounding box has zero north-south span, so no ratio exists.
    #[error("degenerate extent: all points share one latitude")]
    DegenerateExtent,

    /// An angle component is out of range or not a finite number.
    #[error("malformed angle: {0}")]
    MalformedAngle(String),
}
