// SPDX-License-Identifier: MPL-2.0
//! Geographic value objects.
//!
//! - [`Angle`]: sexagesimal magnitude with lexicographic comparison and
//!   base-60 subtraction
//! - [`Point`]: an identified (latitude, longitude) pair

mod angle;
mod point;

pub use angle::{Angle, CANONICAL_ARITY, MAX_DEGREES, RADIX};
pub use point::{Point, MAX_LATITUDE_DEGREES};
