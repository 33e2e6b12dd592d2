// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color resolution and nearest-color search.

use crate::palette::{named_code, palette_color, Layer, NamedCode, NAMED_CODES, PALETTE};
use crate::rgb::Rgb;
use crate::sequence::{SequenceKind, SequenceMatch};

/// Color a matched sequence denotes.
///
/// `None` marks an unresolved sequence: a basic code outside the named-code
/// table (resets, attributes, unknown SGR numbers). The match itself is still
/// valid.
pub fn resolve_color(m: &SequenceMatch) -> Option<Rgb> {
    match &m.kind {
        SequenceKind::Basic { .. } => m.code_value().and_then(named_code).map(|entry| entry.rgb),
        SequenceKind::Indexed { index, .. } => Some(palette_color(*index)),
        SequenceKind::TrueColor { rgb, .. } => Some(*rgb),
    }
}

/// Euclidean distance in 0-255 RGB space.
pub fn color_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Position of the first entry with the smallest distance to `target`.
fn nearest<I>(target: Rgb, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = Rgb>,
{
    candidates
        .into_iter()
        .enumerate()
        .map(|(i, rgb)| (i, color_distance(target, rgb)))
        // `min_by` keeps the first of equal elements, which is the tie-break.
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}

/// Named code closest to `rgb`, scanning codes in ascending order.
pub fn closest_named_code(rgb: Rgb) -> &'static NamedCode {
    let i = nearest(rgb, NAMED_CODES.iter().map(|entry| entry.rgb)).unwrap_or(0);
    &NAMED_CODES[i]
}

/// Named code closest to `rgb` among codes painting `layer`.
pub fn closest_named_code_in(rgb: Rgb, layer: Layer) -> &'static NamedCode {
    NAMED_CODES
        .iter()
        .filter(|entry| entry.layer() == layer)
        .min_by(|a, b| color_distance(rgb, a.rgb).total_cmp(&color_distance(rgb, b.rgb)))
        .unwrap_or(&NAMED_CODES[0])
}

/// Palette index closest to `rgb`, scanning indices in ascending order.
pub fn closest_palette_index(rgb: Rgb) -> u8 {
    nearest(rgb, PALETTE)
        .and_then(|i| u8::try_from(i).ok())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
