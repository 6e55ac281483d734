// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

/// File extensions treated as photographs when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg"];

/// Whether photographs without a readable position are moved aside.
pub const DEFAULT_QUARANTINE: bool = true;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
