// SPDX-License-Identifier: MPL-2.0
//! Float assertions for unit tests.
//!
//! Meter values come out of trigonometry and base-60 arithmetic, so tests
//! compare them with `approx` tolerances rather than `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};
