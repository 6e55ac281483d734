// SPDX-License-Identifier: MPL-2.0
//! EXIF GPS reader.
//!
//! Implements [`PointSource`] with `kamadak-exif`. The `GPSLatitude` and
//! `GPSLongitude` tags hold (degrees, minutes, seconds) rationals; they are
//! converted component by component so the sexagesimal form survives into
//! the engine. The hemisphere reference tags are not read.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::application::port::{point_id, IngestError, PointSource};
use crate::domain::geo::{Angle, Point};

/// Reads points from the primary image's EXIF GPS tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifPointReader;

impl ExifPointReader {
    /// Creates a reader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PointSource for ExifPointReader {
    fn read_point(&self, path: &Path) -> Result<Point, IngestError> {
        let file = File::open(path).map_err(|e| IngestError::Io(e.to_string()))?;
        let mut reader = BufReader::new(file);

        let exif = exif::Reader::new()
            .read_from_container(&mut reader)
            .map_err(|e| IngestError::NoExif(e.to_string()))?;

        let latitude = read_angle(&exif, exif::Tag::GPSLatitude, "GPSLatitude")?;
        let longitude = read_angle(&exif, exif::Tag::GPSLongitude, "GPSLongitude")?;

        let point = Point::new(point_id(path), latitude, longitude)?;
        log::debug!(
            "read {} at {}, {}",
            point.id(),
            point.latitude(),
            point.longitude()
        );
        Ok(point)
    }
}

fn read_angle(
    exif: &exif::Exif,
    tag: exif::Tag,
    field: &'static str,
) -> Result<Angle, IngestError> {
    let entry = exif
        .get_field(tag, exif::In::PRIMARY)
        .ok_or(IngestError::MissingField(field))?;
    angle_from_value(&entry.value, field)
}

/// Converts an EXIF rational list into an [`Angle`], one component per
/// rational.
///
/// # Errors
///
/// Returns [`IngestError::UnsupportedValue`] for a non-rational value or a
/// zero denominator, and [`IngestError::Geo`] if the components are out of
/// range.
pub fn angle_from_value(value: &exif::Value, field: &'static str) -> Result<Angle, IngestError> {
    let exif::Value::Rational(rationals) = value else {
        return Err(IngestError::UnsupportedValue {
            field,
            reason: format!("expected rationals, found {value:?}"),
        });
    };

    let mut components = Vec::with_capacity(rationals.len());
    for rational in rationals {
        if rational.denom == 0 {
            return Err(IngestError::UnsupportedValue {
                field,
                reason: format!("zero denominator in {}/{}", rational.num, rational.denom),
            });
        }
        components.push(rational.to_f64());
    }

    Ok(Angle::from_components(&components)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::GeoError;
    use std::io::Write;

    fn rationals(parts: &[(u32, u32)]) -> exif::Value {
        exif::Value::Rational(
            parts
                .iter()
                .map(|&(num, denom)| exif::Rational { num, denom })
                .collect(),
        )
    }

    #[test]
    fn converts_three_rationals() {
        let value = rationals(&[(48, 1), (51, 1), (2376, 100)]);
        let angle = angle_from_value(&value, "GPSLatitude").unwrap();
        assert_eq!(angle, Angle::new(48.0, 51.0, 23.76).unwrap());
    }

    #[test]
    fn carries_decimal_minutes_into_seconds() {
        let value = rationals(&[(2, 1), (2112, 100), (0, 1)]);
        let angle = angle_from_value(&value, "GPSLongitude").unwrap();
        assert_eq!(angle.components()[..2], [2.0, 21.0]);
        assert!((angle.components()[2] - 7.2).abs() < 1e-9);
    }

    #[test]
    fn decimal_degrees_become_sexagesimal() {
        let value = rationals(&[(485, 10), (0, 1), (0, 1)]);
        let angle = angle_from_value(&value, "GPSLatitude").unwrap();
        assert_eq!(angle, Angle::new(48.0, 30.0, 0.0).unwrap());
    }

    #[test]
    fn keeps_short_lists_for_later_arity_checks() {
        let value = rationals(&[(48, 1), (5123, 100)]);
        let angle = angle_from_value(&value, "GPSLatitude").unwrap();
        assert_eq!(angle.arity(), 2);
    }

    #[test]
    fn rejects_zero_denominator() {
        let value = rationals(&[(48, 1), (51, 0), (0, 1)]);
        assert!(matches!(
            angle_from_value(&value, "GPSLatitude"),
            Err(IngestError::UnsupportedValue {
                field: "GPSLatitude",
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_minutes() {
        let value = rationals(&[(48, 1), (75, 1), (0, 1)]);
        assert!(matches!(
            angle_from_value(&value, "GPSLatitude"),
            Err(IngestError::Geo(GeoError::MalformedAngle(_)))
        ));
    }

    #[test]
    fn rejects_non_rational_values() {
        let value = exif::Value::Ascii(vec![b"N".to_vec()]);
        assert!(matches!(
            angle_from_value(&value, "GPSLatitude"),
            Err(IngestError::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ExifPointReader::new().read_point(Path::new("/nonexistent/path/image.jpg"));
        assert!(matches!(result, Err(IngestError::Io(_))));
    }

    #[test]
    fn file_without_exif_is_rejected() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = temp_dir.path().join("plain.jpg");
        let mut file = File::create(&path).expect("create file");
        writeln!(file, "not an image").expect("write");

        let result = ExifPointReader::new().read_point(&path);
        assert!(matches!(result, Err(IngestError::NoExif(_))));
    }
}
