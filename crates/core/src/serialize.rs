// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rebuilds sequence text for a new color while keeping the original spelling.

use crate::palette::{palette_color, Layer};
use crate::resolve::{closest_named_code, closest_named_code_in, closest_palette_index, resolve_color};
use crate::rgb::Rgb;
use crate::sequence::{SequenceKind, SequenceMatch};

/// Color requested for a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorTarget {
    /// A basic SGR code, written verbatim.
    Code(String),
    /// An entry of the 256-color palette.
    PaletteIndex(u8),
    /// An arbitrary color.
    Rgb(Rgb),
}

impl From<Rgb> for ColorTarget {
    fn from(rgb: Rgb) -> Self {
        ColorTarget::Rgb(rgb)
    }
}

/// Replacement text for `m` painted with `target`.
///
/// Returns the original text unchanged when the target is what `m` already
/// denotes, so a resolve-then-replace round trip is byte-identical.
///
/// - Basic/attributed: prefix and attribute groups are kept; only the terminal
///   code changes. Colors are mapped to the nearest named code of the same
///   layer.
/// - Indexed/true color: a fresh `38;5;`/`48;5;` or `38;2;`/`48;2;` sequence
///   with the original prefix and layer.
/// - A code target on an extended sequence yields the basic form
///   `<prefix><code>m`.
pub fn replace(m: &SequenceMatch, target: &ColorTarget) -> String {
    if is_unchanged(m, target) {
        return m.text.clone();
    }

    let prefix = m.prefix.spelling();
    match (&m.kind, target) {
        (SequenceKind::Basic { attribute_prefix, .. }, ColorTarget::Code(code)) => {
            format!("{prefix}{attribute_prefix}{code}m")
        }
        (_, ColorTarget::Code(code)) => format!("{prefix}{code}m"),

        (SequenceKind::Basic { attribute_prefix, .. }, ColorTarget::PaletteIndex(index)) => {
            basic(prefix, attribute_prefix, m.layer(), palette_color(*index))
        }
        (SequenceKind::Basic { attribute_prefix, .. }, ColorTarget::Rgb(rgb)) => {
            basic(prefix, attribute_prefix, m.layer(), *rgb)
        }

        (SequenceKind::Indexed { layer, .. }, ColorTarget::PaletteIndex(index)) => {
            indexed(prefix, *layer, *index)
        }
        (SequenceKind::Indexed { layer, .. }, ColorTarget::Rgb(rgb)) => {
            indexed(prefix, *layer, closest_palette_index(*rgb))
        }

        (SequenceKind::TrueColor { layer, .. }, ColorTarget::PaletteIndex(index)) => {
            true_color(prefix, *layer, palette_color(*index))
        }
        (SequenceKind::TrueColor { layer, .. }, ColorTarget::Rgb(rgb)) => {
            true_color(prefix, *layer, *rgb)
        }
    }
}

fn is_unchanged(m: &SequenceMatch, target: &ColorTarget) -> bool {
    match (&m.kind, target) {
        (SequenceKind::Basic { code, .. }, ColorTarget::Code(new)) => code == new,
        (_, ColorTarget::Code(_)) => false,
        (SequenceKind::Indexed { index, .. }, ColorTarget::PaletteIndex(new)) => index == new,
        (_, ColorTarget::PaletteIndex(index)) => resolve_color(m) == Some(palette_color(*index)),
        (_, ColorTarget::Rgb(rgb)) => resolve_color(m) == Some(*rgb),
    }
}

fn basic(prefix: &str, attribute_prefix: &str, layer: Option<Layer>, rgb: Rgb) -> String {
    let entry = match layer {
        Some(layer) => closest_named_code_in(rgb, layer),
        None => closest_named_code(rgb),
    };
    format!("{prefix}{attribute_prefix}{}m", entry.code)
}

fn indexed(prefix: &str, layer: Layer, index: u8) -> String {
    format!("{prefix}{};5;{index}m", layer.extended_selector())
}

fn true_color(prefix: &str, layer: Layer, rgb: Rgb) -> String {
    format!(
        "{prefix}{};2;{};{};{}m",
        layer.extended_selector(),
        rgb.r,
        rgb.g,
        rgb.b
    )
}

#[cfg(test)]
#[path = "serialize_tests.rs"]
mod tests;
