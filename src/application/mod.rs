// SPDX-License-Identifier: MPL-2.0
//! Application layer - use cases and the ports they depend on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`survey`]: The folder survey use case
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer and the engine
//! - Infrastructure layer implements application layer ports
//! - The command-line front end calls application layer use cases
//!
//! # Example
//!
//! ```no_run
//! use photo_extent::application::survey::{survey_folder, SurveyOptions};
//! use photo_extent::infrastructure::ExifPointReader;
//! use std::path::Path;
//!
//! let options = SurveyOptions {
//!     extensions: vec!["jpg".to_string()],
//!     filtered_folder: None,
//! };
//! let report = survey_folder(Path::new("/photos/trip"), &options, &ExifPointReader::new())?;
//! println!("{} photographs, ratio {:?}", report.points.len(), report.aspect_ratio());
//! # Ok::<(), photo_extent::error::Error>(())
//! ```

pub mod port;
pub mod survey;
