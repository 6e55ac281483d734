// SPDX-License-Identifier: MPL-2.0
//! Directional extremes of a point set.
//!
//! The first point seeds all four extremes; every later point replaces an
//! extreme only when it compares strictly beyond it. A point whose angle
//! cannot be compared (unequal arity) is skipped for that axis and recorded as
//! a [`ComparisonAnomaly`].

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::error::GeoError;
use crate::domain::geo::{Angle, Point};

/// Coordinate axis of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn of(self, point: &Point) -> &Angle {
        match self {
            Axis::Latitude => point.latitude(),
            Axis::Longitude => point.longitude(),
        }
    }
}

/// A comparison the tracker could not decide.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonAnomaly {
    /// Identifier of the point that was skipped.
    pub point_id: String,
    /// Axis on which it was skipped.
    pub axis: Axis,
    /// Why the comparison failed.
    pub error: GeoError,
}

/// The four extreme points of a set, borrowed from the input slice.
#[derive(Debug, Clone)]
pub struct ExtentResult<'a> {
    /// Greatest latitude.
    pub north: &'a Point,
    /// Least latitude.
    pub south: &'a Point,
    /// Greatest longitude.
    pub east: &'a Point,
    /// Least longitude.
    pub west: &'a Point,
    anomalies: Vec<ComparisonAnomaly>,
}

impl<'a> ExtentResult<'a> {
    fn seeded(first: &'a Point) -> Self {
        Self {
            north: first,
            south: first,
            east: first,
            west: first,
            anomalies: Vec::new(),
        }
    }

    /// Comparisons that were skipped while scanning, in input order.
    #[must_use]
    pub fn anomalies(&self) -> &[ComparisonAnomaly] {
        &self.anomalies
    }

    fn consider(&mut self, point: &'a Point) {
        self.consider_axis(point, Axis::Latitude);
        self.consider_axis(point, Axis::Longitude);
    }

    fn consider_axis(&mut self, point: &'a Point, axis: Axis) {
        let (high, low) = match axis {
            Axis::Latitude => (&mut self.north, &mut self.south),
            Axis::Longitude => (&mut self.east, &mut self.west),
        };

        let value = axis.of(point);
        let orderings = value
            .compare(axis.of(*high))
            .and_then(|above| Ok((above, value.compare(axis.of(*low))?)));

        match orderings {
            Ok((above, below)) => {
                if above == Ordering::Greater {
                    *high = point;
                }
                if below == Ordering::Less {
                    *low = point;
                }
            }
            Err(error) => {
                log::warn!(
                    "skipping {:?} of {} while tracking extremes: {}",
                    axis,
                    point.id(),
                    error
                );
                self.anomalies.push(ComparisonAnomaly {
                    point_id: point.id().to_string(),
                    axis,
                    error,
                });
            }
        }
    }
}

/// Finds the northmost, southmost, eastmost and westmost points.
///
/// # Errors
///
/// Returns [`GeoError::EmptyInput`] if `points` is empty. Arity mismatches do
/// not fail the scan; see [`ExtentResult::anomalies`].
pub fn find_extremes(points: &[Point]) -> Result<ExtentResult<'_>, GeoError> {
    let (first, rest) = points.split_first().ok_or(GeoError::EmptyInput)?;

    let mut extent = ExtentResult::seeded(first);
    for point in rest {
        extent.consider(point);
    }

    log::debug!(
        "extent of {} points: north={} south={} east={} west={}",
        points.len(),
        extent.north.id(),
        extent.south.id(),
        extent.east.id(),
        extent.west.id()
    );

    Ok(extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: &str, lat: (f64, f64, f64), lon: (f64, f64, f64)) -> Point {
        Point::new(
            id,
            Angle::new(lat.0, lat.1, lat.2).unwrap(),
            Angle::new(lon.0, lon.1, lon.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(find_extremes(&[]).unwrap_err(), GeoError::EmptyInput);
    }

    #[test]
    fn single_point_is_every_extreme() {
        let points = [point("only", (45.0, 0.0, 0.0), (7.0, 0.0, 0.0))];
        let extent = find_extremes(&points).unwrap();

        for extreme in [extent.north, extent.south, extent.east, extent.west] {
            assert!(std::ptr::eq(extreme, &points[0]));
        }
        assert!(extent.anomalies().is_empty());
    }

    #[test]
    fn picks_extremes_by_lexicographic_order() {
        let points = [
            point("a", (45.0, 10.0, 0.0), (7.0, 30.0, 0.0)),
            point("b", (45.0, 10.0, 30.0), (7.0, 29.0, 59.0)),
            point("c", (44.0, 59.0, 59.0), (7.0, 31.0, 0.0)),
            point("d", (45.0, 9.0, 0.0), (6.0, 0.0, 0.0)),
        ];
        let extent = find_extremes(&points).unwrap();

        assert_eq!(extent.north.id(), "b");
        assert_eq!(extent.south.id(), "c");
        assert_eq!(extent.east.id(), "c");
        assert_eq!(extent.west.id(), "d");
    }

    #[test]
    fn ties_keep_the_earlier_point() {
        let points = [
            point("first", (45.0, 0.0, 0.0), (7.0, 0.0, 0.0)),
            point("second", (45.0, 0.0, 0.0), (7.0, 0.0, 0.0)),
        ];
        let extent = find_extremes(&points).unwrap();

        assert!(std::ptr::eq(extent.north, &points[0]));
        assert!(std::ptr::eq(extent.west, &points[0]));
    }

    #[test]
    fn arity_mismatch_is_reported_and_skipped() {
        let short = Point::new(
            "short.jpg",
            Angle::from_components(&[50.0, 0.0]).unwrap(),
            Angle::new(9.0, 0.0, 0.0).unwrap(),
        )
        .unwrap();
        let points = [
            point("a", (45.0, 0.0, 0.0), (7.0, 0.0, 0.0)),
            short,
            point("b", (46.0, 0.0, 0.0), (8.0, 0.0, 0.0)),
        ];
        let extent = find_extremes(&points).unwrap();

        assert_eq!(extent.north.id(), "b");
        assert_eq!(extent.east.id(), "short.jpg");
        assert_eq!(
            extent.anomalies(),
            &[ComparisonAnomaly {
                point_id: "short.jpg".to_string(),
                axis: Axis::Latitude,
                error: GeoError::ArityMismatch { left: 2, right: 3 },
            }]
        );
    }
}
