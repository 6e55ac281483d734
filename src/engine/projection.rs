// SPDX-License-Identifier: MPL-2.0
//! Angular spans to meters on a spherical, equirectangular earth.
//!
//! A degree of latitude is the same length everywhere; a degree of longitude
//! shrinks with the cosine of the latitude it is measured at. No ellipsoid or
//! datum correction is applied.

use std::cmp::Ordering;

use crate::domain::error::GeoError;
use crate::domain::geo::Angle;

/// Length of the equator used for every conversion.
pub const EQUATOR_LENGTH_M: f64 = 40_000_000.0;

/// Meters spanned by one degree of arc.
pub const METERS_PER_DEGREE: f64 = EQUATOR_LENGTH_M / 360.0;

/// Meters spanned by one minute of arc.
pub const METERS_PER_MINUTE: f64 = EQUATOR_LENGTH_M / 21_600.0;

/// Meters spanned by one second of arc.
pub const METERS_PER_SECOND: f64 = EQUATOR_LENGTH_M / 1_296_000.0;

/// Converts a latitude span to meters.
///
/// # Errors
///
/// Returns [`GeoError::ArityMismatch`] if `delta` is not a
/// (degrees, minutes, seconds) triple.
pub fn to_meters_latitude(delta: &Angle) -> Result<f64, GeoError> {
    let (degrees, minutes, seconds) = delta.dms()?;
    Ok(degrees * METERS_PER_DEGREE + minutes * METERS_PER_MINUTE + seconds * METERS_PER_SECOND)
}

/// Converts a longitude span to meters at `reference_latitude`.
///
/// # Errors
///
/// Returns [`GeoError::ArityMismatch`] if `delta` is not a
/// (degrees, minutes, seconds) triple.
pub fn to_meters_longitude(delta: &Angle, reference_latitude: &Angle) -> Result<f64, GeoError> {
    let meters = to_meters_latitude(delta)?;
    Ok(meters * reference_latitude.to_radians().cos())
}

/// Returns whichever latitude lies closer to its pole.
///
/// Measuring longitude there gives the smaller, conservative distance.
///
/// # Errors
///
/// Returns [`GeoError::ArityMismatch`] if the two angles cannot be compared.
pub fn reference_latitude_for<'a>(a: &'a Angle, b: &'a Angle) -> Result<&'a Angle, GeoError> {
    Ok(match a.compare(b)? {
        Ordering::Less => b,
        Ordering::Equal | Ordering::Greater => a,
    })
}
