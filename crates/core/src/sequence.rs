// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match types produced by the scanner.

use crate::palette::{code_layer, Layer};
use crate::pattern::EscapePrefix;
use crate::rgb::Rgb;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Syntactic class of a matched sequence.
///
/// `Basic` and `WithAttributes` share one grammar; they differ only in whether
/// an attribute prefix is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceClass {
    /// `ESC[<code>m`
    Basic,
    /// `ESC[<attr>;...;<code>m`
    WithAttributes,
    /// `ESC[38;5;<index>m` / `ESC[48;5;<index>m`
    Indexed256,
    /// `ESC[38;2;<r>;<g>;<b>m` / `ESC[48;2;<r>;<g>;<b>m`
    TrueColor,
}

impl SequenceClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            SequenceClass::Basic => "basic",
            SequenceClass::WithAttributes => "with_attributes",
            SequenceClass::Indexed256 => "indexed256",
            SequenceClass::TrueColor => "true_color",
        }
    }
}

impl fmt::Display for SequenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a matched sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceKind {
    /// Basic or attributed SGR code. Both fields are verbatim source text.
    Basic {
        /// Everything between the escape prefix and the terminal digit group,
        /// e.g. `"1;4;"`. Empty for plain `ESC[31m`.
        attribute_prefix: String,
        /// The terminal digit group.
        code: String,
    },
    Indexed {
        layer: Layer,
        index: u8,
    },
    TrueColor {
        layer: Layer,
        rgb: Rgb,
    },
}

/// One escape sequence found in a text buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SequenceMatch {
    /// Byte range `[start, end)` in the scanned text.
    pub range: Range<usize>,
    /// The matched substring.
    pub text: String,
    /// How the escape character was spelled.
    pub prefix: EscapePrefix,
    #[serde(flatten)]
    pub kind: SequenceKind,
}

impl SequenceMatch {
    pub fn class(&self) -> SequenceClass {
        match &self.kind {
            SequenceKind::Basic {
                attribute_prefix, ..
            } if attribute_prefix.is_empty() => SequenceClass::Basic,
            SequenceKind::Basic { .. } => SequenceClass::WithAttributes,
            SequenceKind::Indexed { .. } => SequenceClass::Indexed256,
            SequenceKind::TrueColor { .. } => SequenceClass::TrueColor,
        }
    }

    /// Layer painted by the sequence. Basic codes outside the color families
    /// (e.g. `0`, `1`) have none.
    pub fn layer(&self) -> Option<Layer> {
        match &self.kind {
            SequenceKind::Basic { .. } => self.code_value().and_then(code_layer),
            SequenceKind::Indexed { layer, .. } | SequenceKind::TrueColor { layer, .. } => {
                Some(*layer)
            }
        }
    }

    /// Terminal code digits of a basic/attributed sequence.
    pub fn code(&self) -> Option<&str> {
        match &self.kind {
            SequenceKind::Basic { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Numeric value of the terminal code; `None` when absent or too large.
    pub fn code_value(&self) -> Option<u16> {
        self.code().and_then(|code| code.parse().ok())
    }

    /// Attribute prefix of a basic/attributed sequence, verbatim.
    pub fn attribute_prefix(&self) -> Option<&str> {
        match &self.kind {
            SequenceKind::Basic {
                attribute_prefix, ..
            } => Some(attribute_prefix),
            _ => None,
        }
    }

    /// Individual attribute groups, e.g. `["1", "4"]` for `ESC[1;4;31m`.
    pub fn attributes(&self) -> Vec<&str> {
        self.attribute_prefix()
            .map(|prefix| prefix.split_terminator(';').collect())
            .unwrap_or_default()
    }

    pub fn palette_index(&self) -> Option<u8> {
        match &self.kind {
            SequenceKind::Indexed { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Cursor-style containment: a caret on either edge still addresses the
    /// sequence.
    pub fn contains(&self, offset: usize) -> bool {
        self.range.start <= offset && offset <= self.range.end
    }

    pub(crate) fn shifted(mut self, by: usize) -> Self {
        self.range = (self.range.start + by)..(self.range.end + by);
        self
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
