// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static color tables: named SGR codes and the 256-entry indexed palette.
//!
//! All tables are `const` data, so lookups never allocate and never fail for
//! in-domain keys.

use crate::rgb::Rgb;
use serde::{Deserialize, Serialize};

/// Which side of a cell a sequence paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// Leading parameter of the extended color forms (`38;...` / `48;...`).
    pub const fn extended_selector(self) -> &'static str {
        match self {
            Layer::Foreground => "38",
            Layer::Background => "48",
        }
    }
}

/// One entry of the named-code table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedCode {
    pub code: u8,
    pub name: &'static str,
    pub rgb: Rgb,
}

impl NamedCode {
    pub const fn layer(&self) -> Layer {
        match self.code {
            40..=47 | 100..=107 => Layer::Background,
            _ => Layer::Foreground,
        }
    }
}

const fn named(code: u8, name: &'static str, rgb: Rgb) -> NamedCode {
    NamedCode { code, name, rgb }
}

const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
const GREEN: Rgb = Rgb::new(0x00, 0xff, 0x00);
const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);
const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);
const MAGENTA: Rgb = Rgb::new(0xff, 0x00, 0xff);
const CYAN: Rgb = Rgb::new(0x00, 0xff, 0xff);
const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

const BRIGHT_BLACK: Rgb = Rgb::new(0x80, 0x80, 0x80);
const BRIGHT_RED: Rgb = Rgb::new(0xff, 0x6b, 0x6b);
const BRIGHT_GREEN: Rgb = Rgb::new(0x4e, 0xcd, 0xc4);
const BRIGHT_YELLOW: Rgb = Rgb::new(0xff, 0xe6, 0x6d);
const BRIGHT_BLUE: Rgb = Rgb::new(0x4d, 0xab, 0xf7);
const BRIGHT_MAGENTA: Rgb = Rgb::new(0xda, 0x77, 0xf2);
const BRIGHT_CYAN: Rgb = Rgb::new(0x74, 0xc0, 0xfc);
const BRIGHT_WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Named SGR color codes in ascending numeric order.
///
/// Nearest-color search walks this table front to back, so the order is part
/// of the tie-break contract.
pub const NAMED_CODES: [NamedCode; 32] = [
    named(30, "Black", BLACK),
    named(31, "Red", RED),
    named(32, "Green", GREEN),
    named(33, "Yellow", YELLOW),
    named(34, "Blue", BLUE),
    named(35, "Magenta", MAGENTA),
    named(36, "Cyan", CYAN),
    named(37, "White", WHITE),
    named(40, "BG Black", BLACK),
    named(41, "BG Red", RED),
    named(42, "BG Green", GREEN),
    named(43, "BG Yellow", YELLOW),
    named(44, "BG Blue", BLUE),
    named(45, "BG Magenta", MAGENTA),
    named(46, "BG Cyan", CYAN),
    named(47, "BG White", WHITE),
    named(90, "Bright Black", BRIGHT_BLACK),
    named(91, "Bright Red", BRIGHT_RED),
    named(92, "Bright Green", BRIGHT_GREEN),
    named(93, "Bright Yellow", BRIGHT_YELLOW),
    named(94, "Bright Blue", BRIGHT_BLUE),
    named(95, "Bright Magenta", BRIGHT_MAGENTA),
    named(96, "Bright Cyan", BRIGHT_CYAN),
    named(97, "Bright White", BRIGHT_WHITE),
    named(100, "BG Bright Black", BRIGHT_BLACK),
    named(101, "BG Bright Red", BRIGHT_RED),
    named(102, "BG Bright Green", BRIGHT_GREEN),
    named(103, "BG Bright Yellow", BRIGHT_YELLOW),
    named(104, "BG Bright Blue", BRIGHT_BLUE),
    named(105, "BG Bright Magenta", BRIGHT_MAGENTA),
    named(106, "BG Bright Cyan", BRIGHT_CYAN),
    named(107, "BG Bright White", BRIGHT_WHITE),
];

/// Codes that are valid SGR color resets but carry no color of their own.
pub const RESET_CODES: [(u8, &str); 3] = [
    (0, "Reset"),
    (39, "Default Foreground"),
    (49, "Default Background"),
];

/// Channel levels of the 6x6x6 cube (indices 16-231).
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// First index of the grayscale ramp.
pub const GRAYSCALE_START: u8 = 232;

/// The 256-entry indexed palette.
pub const PALETTE: [Rgb; 256] = build_palette();

const fn build_palette() -> [Rgb; 256] {
    let mut palette = [BLACK; 256];

    // 0-7 mirror codes 30-37, 8-15 mirror codes 90-97.
    let mut i = 0;
    while i < 8 {
        palette[i] = NAMED_CODES[i].rgb;
        palette[i + 8] = NAMED_CODES[i + 16].rgb;
        i += 1;
    }

    let mut r = 0;
    while r < 6 {
        let mut g = 0;
        while g < 6 {
            let mut b = 0;
            while b < 6 {
                palette[16 + r * 36 + g * 6 + b] =
                    Rgb::new(CUBE_LEVELS[r], CUBE_LEVELS[g], CUBE_LEVELS[b]);
                b += 1;
            }
            g += 1;
        }
        r += 1;
    }

    let mut step = 0;
    while step < 24 {
        palette[GRAYSCALE_START as usize + step] = Rgb::gray(8 + (step as u8) * 10);
        step += 1;
    }

    palette
}

/// Look up a named color code. `None` for pseudo-codes and anything unknown.
pub fn named_code(code: u16) -> Option<&'static NamedCode> {
    NAMED_CODES.iter().find(|entry| u16::from(entry.code) == code)
}

/// Human label for a named code or a reset pseudo-code.
pub fn code_label(code: u16) -> Option<&'static str> {
    named_code(code).map(|entry| entry.name).or_else(|| {
        RESET_CODES
            .iter()
            .find(|(reset, _)| u16::from(*reset) == code)
            .map(|(_, label)| *label)
    })
}

/// Layer a basic code paints, when it has one.
pub fn code_layer(code: u16) -> Option<Layer> {
    match code {
        30..=39 | 90..=97 => Some(Layer::Foreground),
        40..=49 | 100..=107 => Some(Layer::Background),
        _ => None,
    }
}

/// Palette entry for an index.
pub fn palette_color(index: u8) -> Rgb {
    PALETTE[usize::from(index)]
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
