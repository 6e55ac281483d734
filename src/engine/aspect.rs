// SPDX-License-Identifier: MPL-2.0
//! Physical size and shape of an extent.

use serde::Serialize;

use super::extent::ExtentResult;
use super::projection::{reference_latitude_for, to_meters_latitude, to_meters_longitude};
use crate::domain::error::GeoError;
use crate::domain::geo::Angle;

/// Angular and linear spans of an extent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// |north − south| latitude.
    pub latitude_delta: Angle,
    /// |east − west| longitude.
    pub longitude_delta: Angle,
    /// Latitude the longitude span was scaled at.
    pub reference_latitude: Angle,
    /// North-south span in meters.
    pub width_m: f64,
    /// East-west span in meters.
    pub length_m: f64,
}

impl Measurement {
    /// Returns `length / width`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::DegenerateExtent`] when the width is zero.
    pub fn ratio(&self) -> Result<f64, GeoError> {
        if self.width_m == 0.0 {
            return Err(GeoError::DegenerateExtent);
        }
        Ok(self.length_m / self.width_m)
    }
}

/// Measures the bounding rectangle of `extent`.
///
/// # Errors
///
/// Propagates [`GeoError::ArityMismatch`] when extremes cannot be subtracted.
pub fn measure(extent: &ExtentResult<'_>) -> Result<Measurement, GeoError> {
    let north = extent.north.latitude();
    let south = extent.south.latitude();

    let latitude_delta = north.absolute_difference(south)?;
    let longitude_delta = extent
        .east
        .longitude()
        .absolute_difference(extent.west.longitude())?;
    let reference_latitude = reference_latitude_for(north, south)?.clone();

    let width_m = to_meters_latitude(&latitude_delta)?;
    let length_m = to_meters_longitude(&longitude_delta, &reference_latitude)?;

    Ok(Measurement {
        latitude_delta,
        longitude_delta,
        reference_latitude,
        width_m,
        length_m,
    })
}

/// Returns the east-west to north-south proportion of `extent`.
///
/// # Errors
///
/// Returns [`GeoError::DegenerateExtent`] if every point shares one latitude,
/// or propagates [`GeoError::ArityMismatch`].
pub fn aspect_ratio(extent: &ExtentResult<'_>) -> Result<f64, GeoError> {
    measure(extent)?.ratio()
}
