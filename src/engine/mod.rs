// SPDX-License-Identifier: MPL-2.0
//! Geographic extent and projection engine.
//!
//! Pure computation over in-memory [`Point`]s: nothing here reads files or
//! keeps state between calls, so disjoint point sets can be processed from
//! several threads at once.
//!
//! - [`extent`]: directional extremes ([`find_extremes`])
//! - [`projection`]: angular spans to meters
//! - [`aspect`]: meter spans and the length/width ratio
//!
//! # Example
//!
//! ```
//! use photo_extent::domain::geo::{Angle, Point};
//! use photo_extent::engine;
//!
//! let points = vec![
//!     Point::new("a.jpg", Angle::new(40.0, 0.0, 0.0)?, Angle::new(10.0, 0.0, 0.0)?)?,
//!     Point::new("b.jpg", Angle::new(41.0, 0.0, 0.0)?, Angle::new(11.0, 0.0, 0.0)?)?,
//! ];
//! let (extent, ratio) = engine::compute_extent_and_aspect_ratio(&points)?;
//! assert_eq!(extent.north.id(), "b.jpg");
//! assert!((ratio - 41.0_f64.to_radians().cos()).abs() < 1e-9);
//! # Ok::<(), photo_extent::domain::error::GeoError>(())
//! ```

pub mod aspect;
pub mod extent;
pub mod projection;

pub use aspect::{aspect_ratio, measure, Measurement};
pub use extent::{find_extremes, Axis, ComparisonAnomaly, ExtentResult};

use crate::domain::error::GeoError;
use crate::domain::geo::Point;

/// Returns the bounding points of `points`.
///
/// # Errors
///
/// Returns [`GeoError::EmptyInput`] for an empty slice.
pub fn compute_extent(points: &[Point]) -> Result<ExtentResult<'_>, GeoError> {
    find_extremes(points)
}

/// Returns the bounding points of `points` and the aspect ratio of their
/// rectangle.
///
/// # Errors
///
/// Returns [`GeoError::EmptyInput`], [`GeoError::DegenerateExtent`] or a
/// propagated [`GeoError::ArityMismatch`].
pub fn compute_extent_and_aspect_ratio(
    points: &[Point],
) -> Result<(ExtentResult<'_>, f64), GeoError> {
    let extent = find_extremes(points)?;
    let ratio = aspect_ratio(&extent)?;
    Ok((extent, ratio))
}
