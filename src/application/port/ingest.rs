// SPDX-License-Identifier: MPL-2.0
//! Point ingestion port definitions.
//!
//! The engine never touches files. A [`PointSource`] turns one photograph into
//! a [`Point`]; the EXIF adapter in `infrastructure::exif_reader` is the production
//! implementation and tests substitute in-memory ones.

use std::path::Path;

use thiserror::Error;

use crate::domain::error::GeoError;
use crate::domain::geo::Point;

// =============================================================================
// IngestError
// =============================================================================

/// Errors that can occur while reading a photograph's position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The file carries no readable EXIF block.
    #[error("no EXIF data: {0}")]
    NoExif(String),

    /// A required EXIF field is absent.
    #[error("EXIF field {0} not found")]
    MissingField(&'static str),

    /// An EXIF field holds a value that cannot be read as an angle.
    #[error("unsupported value in {field}: {reason}")]
    UnsupportedValue {
        /// Name of the EXIF field.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The components were read but do not form a valid position.
    #[error(transparent)]
    Geo(#[from] GeoError),
}

// =============================================================================
// PointSource Trait
// =============================================================================

/// Port for reading the position of a photograph.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so folders can be read concurrently.
///
/// # Example
///
/// ```ignore
/// use photo_extent::application::port::PointSource;
/// use std::path::Path;
///
/// fn describe(source: &impl PointSource, path: &Path) {
///     match source.read_point(path) {
///         Ok(point) => println!("{} at {}, {}", point.id(), point.latitude(), point.longitude()),
///         Err(e) => eprintln!("no position for {}: {e}", path.display()),
///     }
/// }
/// ```
pub trait PointSource: Send + Sync {
    /// Reads the point of the file at `path`. The point id is the file name.
    ///
    /// # Errors
    ///
    /// Returns an [`IngestError`] if the file has no usable position.
    fn read_point(&self, path: &Path) -> Result<Point, IngestError>;
}

/// Identifier used for the point read from `path`.
#[must_use]
pub fn point_id(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string)
}
