// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoration pool keyed by resolved color.

use crate::sink::RenderSink;
use ansi_swatch_core::{PatternSet, Rgb, Scanner};
use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

/// Keeps one host style per distinct color and re-applies all of them on
/// every update.
pub struct DecorationManager<S: RenderSink> {
    sink: S,
    scanner: Scanner,
    styles: HashMap<Rgb, S::Style>,
}

impl<S: RenderSink> DecorationManager<S> {
    /// Manager recognizing every escape prefix.
    pub fn new(sink: S) -> Self {
        Self::with_patterns(sink, PatternSet::all())
    }

    pub fn with_patterns(sink: S, patterns: PatternSet) -> Self {
        Self {
            sink,
            scanner: Scanner::new(patterns),
            styles: HashMap::new(),
        }
    }

    /// Rescan `text` and repaint.
    ///
    /// Colors seen for the first time get a new style. Pooled colors that no
    /// longer occur are applied with an empty range list. Styles are applied
    /// in ascending color order. Returns the number of colored sequences.
    pub fn update(&mut self, text: &str) -> usize {
        let mut by_color: BTreeMap<Rgb, Vec<Range<usize>>> = BTreeMap::new();
        let colors = self.scanner.scan_colors(text);
        let count = colors.len();
        for color in colors {
            by_color.entry(color.rgb).or_default().push(color.range);
        }

        for rgb in by_color.keys() {
            if !self.styles.contains_key(rgb) {
                let style = self.sink.create_style(*rgb);
                self.styles.insert(*rgb, style);
            }
        }

        let mut pooled: Vec<Rgb> = self.styles.keys().copied().collect();
        pooled.sort();
        for rgb in pooled {
            let ranges = by_color.get(&rgb).map(Vec::as_slice).unwrap_or(&[]);
            if let Some(style) = self.styles.get(&rgb) {
                self.sink.apply(style, ranges);
            }
        }

        count
    }

    /// Pooled styles by color.
    pub fn styles(&self) -> &HashMap<Rgb, S::Style> {
        &self.styles
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Release every pooled style and hand the sink back.
    pub fn dispose(mut self) -> S {
        let mut pooled: Vec<(Rgb, S::Style)> = self.styles.drain().collect();
        pooled.sort_by_key(|(rgb, _)| *rgb);
        for (_, style) in pooled {
            self.sink.release(style);
        }
        self.sink
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
