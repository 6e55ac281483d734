// SPDX-License-Identifier: MPL-2.0
//! Folder survey use case.
//!
//! Scans a photo folder, reads every photograph's position through a
//! [`PointSource`], moves unreadable files to the filtered folder and runs the
//! extent engine over what is left. The result is an owned [`SurveyReport`]
//! that outlives the borrowed [`ExtentResult`](crate::engine::ExtentResult).

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::port::{point_id, PointSource};
use crate::directory_scanner::{PhotoFolder, Quarantine};
use crate::domain::error::GeoError;
use crate::domain::geo::Point;
use crate::engine::{self, Measurement};
use crate::error::Result;

/// How a folder is surveyed.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyOptions {
    /// Extensions (without the dot) of the files to read.
    pub extensions: Vec<String>,
    /// Where unreadable files go; `None` leaves them in place.
    pub filtered_folder: Option<PathBuf>,
}

/// A photograph that produced no point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedPhoto {
    pub file: String,
    pub reason: String,
    /// New location when the file was moved to the filtered folder.
    pub moved_to: Option<PathBuf>,
}

/// A comparison the extent tracker skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedComparison {
    pub point_id: String,
    pub axis: engine::Axis,
    pub reason: String,
}

/// Everything learned from one folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyReport {
    pub points: Vec<Point>,
    pub north: Point,
    pub south: Point,
    pub east: Point,
    pub west: Point,
    pub measurement: Measurement,
    pub skipped_comparisons: Vec<SkippedComparison>,
    pub rejected: Vec<RejectedPhoto>,
}

impl SurveyReport {
    /// Returns the east-west to north-south proportion.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::DegenerateExtent`] if every photograph shares one
    /// latitude.
    pub fn aspect_ratio(&self) -> std::result::Result<f64, GeoError> {
        self.measurement.ratio()
    }
}

/// Surveys the photographs directly inside `source`.
///
/// # Errors
///
/// Returns an error if the folder cannot be scanned, a rejected file cannot be
/// moved, no photograph has a position ([`GeoError::EmptyInput`]), or the
/// extremes cannot be measured.
pub fn survey_folder(
    source: &Path,
    options: &SurveyOptions,
    reader: &impl PointSource,
) -> Result<SurveyReport> {
    let folder = PhotoFolder::scan(source, &options.extensions)?;
    log::info!(
        "found {} photographs in {}",
        folder.len(),
        folder.directory().display()
    );

    let quarantine = options
        .filtered_folder
        .as_deref()
        .map(Quarantine::open)
        .transpose()?;

    let mut points = Vec::with_capacity(folder.len());
    let mut rejected = Vec::new();

    for photo in folder.photos() {
        match reader.read_point(photo) {
            Ok(point) => points.push(point),
            Err(err) => {
                log::warn!("no position for {}: {}", photo.display(), err);
                let moved_to = match &quarantine {
                    Some(quarantine) => Some(quarantine.admit(photo)?),
                    None => None,
                };
                rejected.push(RejectedPhoto {
                    file: point_id(photo),
                    reason: err.to_string(),
                    moved_to,
                });
            }
        }
    }

    let extent = engine::compute_extent(&points)?;
    let measurement = engine::measure(&extent)?;

    let skipped_comparisons = extent
        .anomalies()
        .iter()
        .map(|anomaly| SkippedComparison {
            point_id: anomaly.point_id.clone(),
            axis: anomaly.axis,
            reason: anomaly.error.to_string(),
        })
        .collect();

    let north = extent.north.clone();
    let south = extent.south.clone();
    let east = extent.east.clone();
    let west = extent.west.clone();

    Ok(SurveyReport {
        points,
        north,
        south,
        east,
        west,
        measurement,
        skipped_comparisons,
        rejected,
    })
}
