// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escaped ANSI color sequence engine.
//!
//! Finds SGR color sequences written as literal text (`\033[31m`,
//! `\x1b[38;5;208m`, `\e[48;2;10;20;30m`, or with a real ESC byte), resolves
//! each to an RGB color, searches the nearest named code or palette entry for
//! an arbitrary color, and rewrites a sequence for a new color while keeping
//! its original spelling.
//!
//! Every function here is pure. Malformed input is never an error: it simply
//! produces no match, and sequences without a color resolve to `None`.

mod palette;
mod pattern;
mod present;
mod resolve;
mod rgb;
mod scan;
mod sequence;
mod serialize;

pub use palette::{
    code_label, code_layer, named_code, palette_color, Layer, NamedCode, CUBE_LEVELS,
    GRAYSCALE_START, NAMED_CODES, PALETTE, RESET_CODES,
};
pub use pattern::{EscapePrefix, Grammar, PatternSet, UnknownPrefix};
pub use present::{hover_info, pick_items, HoverInfo, PickItem};
pub use resolve::{
    closest_named_code, closest_named_code_in, closest_palette_index, color_distance,
    resolve_color,
};
pub use rgb::{ParseColorError, Rgb};
pub use scan::{match_at, parse_sequence, scan, scan_colors, ColorMatch, Scanner};
pub use sequence::{SequenceClass, SequenceKind, SequenceMatch};
pub use serialize::{replace, ColorTarget};
