// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output format handling for text and JSON modes.

use std::io::Write;
use std::ops::Range;

use ansi_swatch_core::{
    hover_info, resolve_color, EscapePrefix, HoverInfo, NamedCode, PickItem, Rgb, SequenceClass,
    SequenceMatch,
};
use serde::Serialize;

use crate::cli::OutputFormat;

pub use crate::output_diagnostic::{print_debug, print_error, print_warning};

/// 1-based line and column (in characters) of a byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn of(text: &str, offset: usize) -> Self {
        let offset = floor_char_boundary(text, offset);
        let before = &text[..offset];
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Sequence text safe to print on a terminal: the real ESC byte shows as `^[`.
pub fn printable(text: &str) -> String {
    text.replace('\x1b', "^[")
}

/// One `scan` result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SequenceRow {
    #[serde(flatten)]
    pub position: Position,
    pub range: Range<usize>,
    pub class: SequenceClass,
    pub prefix: EscapePrefix,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl SequenceRow {
    pub fn new(source: &str, m: &SequenceMatch) -> Self {
        let info = hover_info(m);
        Self {
            position: Position::of(source, m.range.start),
            range: m.range.clone(),
            class: m.class(),
            prefix: m.prefix,
            text: m.text.clone(),
            label: info.label,
            hex: resolve_color(m).map(|rgb| rgb.to_hex()),
        }
    }
}

/// `at` result: hover details plus where the sequence sits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HoverReport {
    #[serde(flatten)]
    pub position: Position,
    pub range: Range<usize>,
    pub class: SequenceClass,
    #[serde(flatten)]
    pub info: HoverInfo,
}

impl HoverReport {
    pub fn new(source: &str, m: &SequenceMatch) -> Self {
        Self {
            position: Position::of(source, m.range.start),
            range: m.range.clone(),
            class: m.class(),
            info: hover_info(m),
        }
    }
}

/// `recolor` edit summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecolorReport {
    pub range: Range<usize>,
    pub original: String,
    pub replacement: String,
    pub changed: bool,
}

/// `closest` result.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClosestReport {
    Named {
        code: u8,
        name: String,
        rgb: Rgb,
        distance: f64,
    },
    Palette {
        index: u8,
        rgb: Rgb,
        distance: f64,
    },
}

impl ClosestReport {
    pub fn named(entry: &NamedCode, distance: f64) -> Self {
        ClosestReport::Named {
            code: entry.code,
            name: entry.name.to_string(),
            rgb: entry.rgb,
            distance,
        }
    }
}

/// One entry of `palette --all`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub index: u8,
    pub rgb: Rgb,
}

/// Painted ranges of one color after `decorate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaintedColor {
    pub rgb: Rgb,
    pub ranges: Vec<Range<usize>>,
}

/// Output writer that handles different formats
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn write_scan(&mut self, rows: &[SequenceRow]) -> std::io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(&rows);
        }
        for row in rows {
            let mut line = format!(
                "{}:{}  {}  {}  {}  {}",
                row.position.line,
                row.position.column,
                row.class,
                row.prefix,
                printable(&row.text),
                row.hex.as_deref().unwrap_or("-"),
            );
            if let Some(label) = &row.label {
                line.push_str("  ");
                line.push_str(label);
            }
            writeln!(self.writer, "{}", line)?;
        }
        Ok(())
    }

    pub fn write_hover(&mut self, report: &HoverReport) -> std::io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(report);
        }
        writeln!(
            self.writer,
            "{}:{}  {}",
            report.position.line, report.position.column, report.class
        )?;
        let display = HoverInfo {
            code: printable(&report.info.code),
            ..report.info.clone()
        };
        write!(self.writer, "{}", display.to_markdown())
    }

    /// Text mode writes the edited document; JSON mode writes the edit.
    pub fn write_recolor(&mut self, report: &RecolorReport, document: &str) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(report),
            OutputFormat::Text => self.write_document(document),
        }
    }

    pub fn write_document(&mut self, document: &str) -> std::io::Result<()> {
        self.writer.write_all(document.as_bytes())?;
        self.writer.flush()
    }

    pub fn write_closest(&mut self, report: &ClosestReport) -> std::io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(report);
        }
        match report {
            ClosestReport::Named {
                code,
                name,
                rgb,
                distance,
            } => writeln!(self.writer, "{code}  {name}  {rgb}  distance {distance:.2}"),
            ClosestReport::Palette {
                index,
                rgb,
                distance,
            } => writeln!(self.writer, "{index}  {rgb}  distance {distance:.2}"),
        }
    }

    pub fn write_pick_items(&mut self, items: &[PickItem]) -> std::io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(&items);
        }
        for item in items {
            writeln!(
                self.writer,
                "{:<10} {:<18} {}",
                item.label, item.description, item.detail
            )?;
        }
        Ok(())
    }

    pub fn write_palette(&mut self, entries: &[PaletteEntry]) -> std::io::Result<()> {
        if self.format == OutputFormat::Json {
            return self.write_json(&entries);
        }
        for entry in entries {
            writeln!(self.writer, "{:>3}  {}", entry.index, entry.rgb)?;
        }
        Ok(())
    }

    /// Text mode writes the decorated document; JSON mode the painted ranges.
    pub fn write_decorated(
        &mut self,
        painted: &[PaintedColor],
        decorated: &str,
    ) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&painted),
            OutputFormat::Text => self.write_document(decorated),
        }
    }

    /// Write a JSON-serializable value as one line
    fn write_json<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
