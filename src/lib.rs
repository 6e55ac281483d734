// SPDX-License-Identifier: MPL-2.0
//! `photo_extent` measures the area covered by a folder of geotagged
//! photographs.
//!
//! It reads each photograph's GPS position as degrees, minutes and seconds,
//! finds the northmost, southmost, eastmost and westmost photographs, and
//! converts the bounding box into meters and an aspect ratio on a spherical,
//! equirectangular earth. The [`engine`] is a pure library; the rest of the
//! crate feeds it from the filesystem.

pub mod application;
pub mod cli;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod engine;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod test_utils;

pub use domain::error::GeoError;
pub use domain::geo::{Angle, Point};
pub use engine::{compute_extent, compute_extent_and_aspect_ratio, ExtentResult};
