// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape-prefix spellings and the grammar of each sequence class.

use crate::palette::Layer;
use crate::rgb::Rgb;
use crate::sequence::SequenceKind;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

/// How the escape character is written in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapePrefix {
    /// `\033[`
    Octal,
    /// `\x1b[`
    Hex,
    /// `\e[`
    Short,
    /// A real ESC byte followed by `[`.
    Literal,
}

impl EscapePrefix {
    pub const ALL: [EscapePrefix; 4] = [
        EscapePrefix::Octal,
        EscapePrefix::Hex,
        EscapePrefix::Short,
        EscapePrefix::Literal,
    ];

    /// Text of the prefix exactly as it appears in a document, including `[`.
    pub const fn spelling(self) -> &'static str {
        match self {
            EscapePrefix::Octal => "\\033[",
            EscapePrefix::Hex => "\\x1b[",
            EscapePrefix::Short => "\\e[",
            EscapePrefix::Literal => "\x1b[",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            EscapePrefix::Octal => "octal",
            EscapePrefix::Hex => "hex",
            EscapePrefix::Short => "short",
            EscapePrefix::Literal => "literal",
        }
    }

    pub fn from_spelling(spelling: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|prefix| prefix.spelling() == spelling)
    }

    const fn regex(self) -> &'static str {
        match self {
            EscapePrefix::Octal => r"\\033\[",
            EscapePrefix::Hex => r"\\x1b\[",
            EscapePrefix::Short => r"\\e\[",
            EscapePrefix::Literal => r"\x1b\[",
        }
    }
}

impl fmt::Display for EscapePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown prefix name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown escape prefix '{0}' (expected octal, hex, short or literal)")]
pub struct UnknownPrefix(pub String);

impl FromStr for EscapePrefix {
    type Err = UnknownPrefix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|prefix| prefix.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPrefix(s.to_string()))
    }
}

/// A sequence grammar. Variants are declared most specific first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grammar {
    TrueColor,
    Indexed256,
    /// Covers both plain and attributed basic codes.
    Basic,
}

impl Grammar {
    /// Order in which grammars claim text.
    pub const SPECIFICITY: [Grammar; 3] = [Grammar::TrueColor, Grammar::Indexed256, Grammar::Basic];

    fn body(self) -> &'static str {
        match self {
            Grammar::TrueColor => {
                r"(?P<selector>38|48);2;(?P<r>[0-9]+);(?P<g>[0-9]+);(?P<b>[0-9]+)m"
            }
            Grammar::Indexed256 => r"(?P<selector>38|48);5;(?P<index>[0-9]+)m",
            Grammar::Basic => r"(?P<attrs>(?:[0-9]+;)*)(?P<code>[0-9]+)m",
        }
    }

    /// Build sequence parameters from a grammar hit. `None` when a parameter
    /// is out of its domain or a basic hit ends inside an extended form.
    fn parse(self, caps: &Captures<'_>) -> Option<SequenceKind> {
        match self {
            Grammar::TrueColor => {
                let channel = |name: &str| caps.name(name)?.as_str().parse::<u8>().ok();
                Some(SequenceKind::TrueColor {
                    layer: selector_layer(caps)?,
                    rgb: Rgb::new(channel("r")?, channel("g")?, channel("b")?),
                })
            }
            Grammar::Indexed256 => Some(SequenceKind::Indexed {
                layer: selector_layer(caps)?,
                index: caps.name("index")?.as_str().parse().ok()?,
            }),
            Grammar::Basic => {
                let attrs = caps.name("attrs")?.as_str();
                if ends_in_extended_selector(attrs) {
                    return None;
                }
                Some(SequenceKind::Basic {
                    attribute_prefix: attrs.to_string(),
                    code: caps.name("code")?.as_str().to_string(),
                })
            }
        }
    }
}

/// True when the terminal digit group of a basic hit is an index or channel of
/// an extended color (`..;38;5;`, `..;48;2;<r>;<g>;` and the like), not a code.
fn ends_in_extended_selector(attrs: &str) -> bool {
    let groups: Vec<Option<u32>> = attrs
        .split_terminator(';')
        .map(|group| group.parse().ok())
        .collect();
    matches!(
        groups.as_slice(),
        [.., Some(38 | 48), Some(5)]
            | [.., Some(38 | 48), Some(2)]
            | [.., Some(38 | 48), Some(2), _]
            | [.., Some(38 | 48), Some(2), _, _]
    )
}

fn selector_layer(caps: &Captures<'_>) -> Option<Layer> {
    match caps.name("selector")?.as_str() {
        "38" => Some(Layer::Foreground),
        "48" => Some(Layer::Background),
        _ => None,
    }
}

/// One syntactic hit of a grammar.
///
/// `parsed` is `None` when the text has the grammar's shape but is rejected
/// (out-of-range parameter, unfinished extended form); the range is still
/// claimed by the scanner.
#[derive(Debug)]
pub(crate) struct Hit<'t> {
    pub range: Range<usize>,
    pub text: &'t str,
    pub parsed: Option<(EscapePrefix, SequenceKind)>,
}

#[derive(Debug)]
struct Compiled {
    true_color: Regex,
    indexed: Regex,
    basic: Regex,
}

/// Compiled grammars for a set of escape-prefix spellings.
#[derive(Debug)]
pub struct PatternSet {
    prefixes: Vec<EscapePrefix>,
    compiled: Option<Compiled>,
}

impl PatternSet {
    /// Pattern set for the given prefixes. Duplicates are ignored; an empty
    /// set matches nothing.
    pub fn new(prefixes: &[EscapePrefix]) -> Self {
        let mut prefixes = prefixes.to_vec();
        prefixes.sort_unstable();
        prefixes.dedup();

        let compiled = if prefixes.is_empty() {
            None
        } else {
            let alternation = prefixes
                .iter()
                .map(|prefix| prefix.regex())
                .collect::<Vec<_>>()
                .join("|");
            // Patterns are assembled from fixed fragments, so compilation only
            // fails if a fragment itself is broken.
            let build = |grammar: Grammar| {
                Regex::new(&format!("(?P<prefix>{}){}", alternation, grammar.body())).ok()
            };
            match (
                build(Grammar::TrueColor),
                build(Grammar::Indexed256),
                build(Grammar::Basic),
            ) {
                (Some(true_color), Some(indexed), Some(basic)) => Some(Compiled {
                    true_color,
                    indexed,
                    basic,
                }),
                _ => None,
            }
        };

        Self { prefixes, compiled }
    }

    /// Pattern set recognizing every spelling.
    pub fn all() -> Self {
        Self::new(&EscapePrefix::ALL)
    }

    pub fn prefixes(&self) -> &[EscapePrefix] {
        &self.prefixes
    }

    fn regex(&self, grammar: Grammar) -> Option<&Regex> {
        let compiled = self.compiled.as_ref()?;
        Some(match grammar {
            Grammar::TrueColor => &compiled.true_color,
            Grammar::Indexed256 => &compiled.indexed,
            Grammar::Basic => &compiled.basic,
        })
    }

    /// Every non-overlapping hit of one grammar, left to right.
    pub(crate) fn hits<'t>(&self, grammar: Grammar, text: &'t str) -> Vec<Hit<'t>> {
        let Some(regex) = self.regex(grammar) else {
            return Vec::new();
        };

        regex
            .captures_iter(text)
            .filter_map(|caps| {
                // Group 0 is always present for a successful match.
                let whole = caps.get(0)?;
                let parsed = caps
                    .name("prefix")
                    .and_then(|p| EscapePrefix::from_spelling(p.as_str()))
                    .zip(grammar.parse(&caps));
                Some(Hit {
                    range: whole.range(),
                    text: whole.as_str(),
                    parsed,
                })
            })
            .collect()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
