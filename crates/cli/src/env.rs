// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by ansi-swatch are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `ANSI_SWATCH_CONFIG`: config file used when `--config` is absent.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(names::ANSI_SWATCH_CONFIG)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `ANSI_SWATCH_DEBUG`: enables debug diagnostics like `--verbose`.
pub fn debug_enabled() -> bool {
    flag_enabled(std::env::var(names::ANSI_SWATCH_DEBUG).ok().as_deref())
}

/// Unset, empty, `0`, `false` and `off` are off; anything else is on.
fn flag_enabled(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "off"),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
