// SPDX-License-Identifier: MPL-2.0
//! Geotagged points.

use serde::Serialize;

use super::Angle;
use crate::domain::error::GeoError;

/// Largest accepted latitude, in decimal degrees.
pub const MAX_LATITUDE_DEGREES: f64 = 90.0;

/// A photograph's position: latitude and longitude magnitudes plus an
/// identifier (usually the file name).
///
/// Points are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    id: String,
    latitude: Angle,
    longitude: Angle,
}

impl Point {
    /// Creates a point.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::MalformedAngle`] if the latitude exceeds 90°.
    pub fn new(id: impl Into<String>, latitude: Angle, longitude: Angle) -> Result<Self, GeoError> {
        let decimal = latitude.to_decimal_degrees();
        if decimal > MAX_LATITUDE_DEGREES {
            return Err(GeoError::MalformedAngle(format!(
                "latitude {latitude} is beyond the pole"
            )));
        }

        Ok(Self {
            id: id.into(),
            latitude,
            longitude,
        })
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the latitude magnitude.
    #[must_use]
    pub fn latitude(&self) -> &Angle {
        &self.latitude
    }

    /// Returns the longitude magnitude.
    #[must_use]
    pub fn longitude(&self) -> &Angle {
        &self.longitude
    }
}
