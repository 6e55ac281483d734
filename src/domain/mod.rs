// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects and rules of the extent engine.
//!
//! This module holds pure types with no I/O. Everything here can be built and
//! tested from in-memory values.
//!
//! # Modules
//!
//! - [`error`]: Domain error type ([`GeoError`](error::GeoError))
//! - [`geo`]: Geographic types ([`Angle`](geo::Angle), [`Point`](geo::Point))

pub mod error;
pub mod geo;
