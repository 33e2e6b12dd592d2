// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Render sink that paints color badges into terminal text.

use std::collections::BTreeMap;
use std::ops::Range;

use ansi_swatch_core::Rgb;
use ansi_swatch_decor::{DecorationLog, RenderSink, StyleId};

use crate::output::PaintedColor;

/// Style handed out by [`TerminalSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub rgb: Rgb,
    /// Matching style in the attached log, if any
    log_style: Option<StyleId>,
}

/// Collects painted ranges per color and renders them as badges placed in
/// front of each sequence. Every call is forwarded to an optional
/// [`DecorationLog`].
pub struct TerminalSink {
    marker: String,
    painted: BTreeMap<Rgb, Vec<Range<usize>>>,
    log: Option<DecorationLog>,
}

impl TerminalSink {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            painted: BTreeMap::new(),
            log: None,
        }
    }

    pub fn with_log(marker: impl Into<String>, log: DecorationLog) -> Self {
        Self {
            log: Some(log),
            ..Self::new(marker)
        }
    }

    /// The marker drawn in true color.
    pub fn badge(&self, rgb: Rgb) -> String {
        format!(
            "\x1b[38;2;{};{};{}m{}\x1b[0m",
            rgb.r, rgb.g, rgb.b, self.marker
        )
    }

    /// Currently painted colors, in ascending color order.
    pub fn painted(&self) -> Vec<PaintedColor> {
        self.painted
            .iter()
            .map(|(rgb, ranges)| PaintedColor {
                rgb: *rgb,
                ranges: ranges.clone(),
            })
            .collect()
    }

    /// `text` with a badge inserted before every painted range.
    ///
    /// Ranges must come from a scan of the same `text`.
    pub fn render(&self, text: &str) -> String {
        let mut starts: Vec<(usize, Rgb)> = self
            .painted
            .iter()
            .flat_map(|(rgb, ranges)| ranges.iter().map(move |r| (r.start, *rgb)))
            .filter(|(start, _)| text.is_char_boundary(*start))
            .collect();
        starts.sort_by_key(|(start, _)| *start);

        let mut out = String::with_capacity(text.len() + starts.len() * 24);
        let mut cursor = 0;
        for (start, rgb) in starts {
            out.push_str(&text[cursor..start]);
            out.push_str(&self.badge(rgb));
            cursor = start;
        }
        out.push_str(&text[cursor..]);
        out
    }
}

impl RenderSink for TerminalSink {
    type Style = Badge;

    fn create_style(&mut self, rgb: Rgb) -> Badge {
        Badge {
            rgb,
            log_style: self.log.as_mut().map(|log| log.create_style(rgb)),
        }
    }

    fn apply(&mut self, style: &Badge, ranges: &[Range<usize>]) {
        if let (Some(log), Some(id)) = (self.log.as_mut(), style.log_style.as_ref()) {
            log.apply(id, ranges);
        }
        if ranges.is_empty() {
            self.painted.remove(&style.rgb);
        } else {
            self.painted.insert(style.rgb, ranges.to_vec());
        }
    }

    fn release(&mut self, style: Badge) {
        self.painted.remove(&style.rgb);
        if let (Some(log), Some(id)) = (self.log.as_mut(), style.log_style) {
            log.release(id);
        }
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
