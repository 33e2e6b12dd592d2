// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scanner: turns a text buffer into an ordered, non-overlapping list of
//! sequence matches.
//!
//! Grammars run in specificity order. The first grammar to hit a span claims
//! it; later, less specific grammars skip anything overlapping a claimed span.
//! This keeps the trailing `30m` of `\033[38;2;10;20;30m` from being read as a
//! basic black foreground.

use crate::pattern::{Grammar, PatternSet};
use crate::resolve::resolve_color;
use crate::rgb::Rgb;
use crate::sequence::SequenceMatch;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::LazyLock;

static DEFAULT_SCANNER: LazyLock<Scanner> = LazyLock::new(Scanner::default);

/// A matched range together with the color it resolves to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorMatch {
    pub range: Range<usize>,
    pub rgb: Rgb,
}

/// Scanner over a fixed pattern set.
#[derive(Debug, Default)]
pub struct Scanner {
    patterns: PatternSet,
}

impl Scanner {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// All sequences in `text`, ordered by start offset.
    pub fn scan(&self, text: &str) -> Vec<SequenceMatch> {
        let mut claims = Claims::default();
        let mut matches = Vec::new();

        for grammar in Grammar::SPECIFICITY {
            for hit in self.patterns.hits(grammar, text) {
                if !claims.claim(&hit.range) {
                    continue;
                }
                if let Some((prefix, kind)) = hit.parsed {
                    matches.push(SequenceMatch {
                        range: hit.range,
                        text: hit.text.to_string(),
                        prefix,
                        kind,
                    });
                }
            }
        }

        matches.sort_by_key(|m| m.range.start);
        matches
    }

    /// The sequence under byte `offset`, looking only at the line that
    /// contains it.
    pub fn match_at(&self, text: &str, offset: usize) -> Option<SequenceMatch> {
        if offset > text.len() {
            return None;
        }
        let (line_start, line) = line_around(text, offset);
        self.scan(line)
            .into_iter()
            .find(|m| m.contains(offset - line_start))
            .map(|m| m.shifted(line_start))
    }

    /// Resolved colors of every sequence in `text`; unresolved sequences are
    /// left out.
    pub fn scan_colors(&self, text: &str) -> Vec<ColorMatch> {
        self.scan(text)
            .into_iter()
            .filter_map(|m| {
                let rgb = resolve_color(&m)?;
                Some(ColorMatch {
                    range: m.range,
                    rgb,
                })
            })
            .collect()
    }
}

/// Byte offset and slice of the line containing `offset`, without its
/// terminator.
fn line_around(text: &str, offset: usize) -> (usize, &str) {
    let bytes = text.as_bytes();
    let start = bytes[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |nl| nl + 1);
    let end = bytes[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(text.len(), |nl| offset + nl);
    (start, &text[start..end])
}

/// Disjoint claimed spans keyed by start offset.
#[derive(Debug, Default)]
struct Claims(BTreeMap<usize, usize>);

impl Claims {
    /// Claim `range` unless it overlaps an existing claim.
    fn claim(&mut self, range: &Range<usize>) -> bool {
        // Claims are disjoint, so the last one starting before `range.end` is
        // the only candidate for overlap.
        let overlaps = self
            .0
            .range(..range.end)
            .next_back()
            .is_some_and(|(_, &end)| end > range.start);
        if overlaps {
            return false;
        }
        self.0.insert(range.start, range.end);
        true
    }
}

/// Scan with every escape-prefix spelling enabled.
pub fn scan(text: &str) -> Vec<SequenceMatch> {
    DEFAULT_SCANNER.scan(text)
}

/// Point query with every escape-prefix spelling enabled.
pub fn match_at(text: &str, offset: usize) -> Option<SequenceMatch> {
    DEFAULT_SCANNER.match_at(text, offset)
}

/// Resolved colors with every escape-prefix spelling enabled.
pub fn scan_colors(text: &str) -> Vec<ColorMatch> {
    DEFAULT_SCANNER.scan_colors(text)
}

/// Classify a standalone sequence, e.g. the text of a range handed back by a
/// host. The first sequence in `text` wins.
pub fn parse_sequence(text: &str) -> Option<SequenceMatch> {
    scan(text).into_iter().next()
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
