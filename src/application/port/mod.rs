// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the survey use case stays
//! independent of the EXIF library that implements them.
//!
//! # Available Ports
//!
//! - [`ingest`]: reading a photograph's position ([`PointSource`])

pub mod ingest;

pub use ingest::{point_id, IngestError, PointSource};
