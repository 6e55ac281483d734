// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping external libraries.
//!
//! # Available Adapters
//!
//! - [`exif_reader`]: GPS positions via `kamadak-exif` (implements [`PointSource`])
//!
//! [`PointSource`]: crate::application::port::PointSource

pub mod exif_reader;

pub use exif_reader::ExifPointReader;
