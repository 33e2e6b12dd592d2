// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Render sink abstraction.

use ansi_swatch_core::Rgb;
use std::ops::Range;

/// Host surface that paints styled ranges.
///
/// A style is created once per color and then re-applied with a fresh range
/// list on every update. Applying an empty list clears the style from the
/// document without releasing it.
pub trait RenderSink {
    /// Handle to a host style object.
    type Style;

    /// Create a style that paints `rgb`.
    fn create_style(&mut self, rgb: Rgb) -> Self::Style;

    /// Paint `ranges` with `style`, replacing whatever it painted before.
    fn apply(&mut self, style: &Self::Style, ranges: &[Range<usize>]);

    /// Release a style; it is never applied again.
    fn release(&mut self, style: Self::Style);
}
