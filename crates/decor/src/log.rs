// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recording render sink.

use crate::sink::RenderSink;
use ansi_swatch_core::Rgb;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::ops::Range;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Style handle issued by [`DecorationLog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(pub u64);

/// One render call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DecorationAction {
    Create { style: StyleId, rgb: Rgb },
    Apply { style: StyleId, ranges: Vec<Range<usize>> },
    Release { style: StyleId },
}

/// A recorded render call with its position in the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationEvent {
    pub seq: u64,
    #[serde(flatten)]
    pub action: DecorationAction,
}

/// Render sink that records every call, optionally as JSONL.
///
/// Clones share the same event list, file and style counter.
pub struct DecorationLog {
    events: Arc<Mutex<Vec<DecorationEvent>>>,
    next_style: Arc<AtomicU64>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl DecorationLog {
    /// Create a new in-memory log
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            next_style: Arc::new(AtomicU64::new(0)),
            file_writer: None,
        }
    }

    /// Create a log that also writes each event to `path` (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
            ..Self::new()
        })
    }

    fn record(&self, action: DecorationAction) {
        let mut events = self.events.lock();
        let event = DecorationEvent {
            seq: events.len() as u64,
            action,
        };
        events.push(event.clone());

        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&event) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    /// All recorded events
    pub fn events(&self) -> Vec<DecorationEvent> {
        self.events.lock().clone()
    }

    /// The last `n` events, oldest first
    pub fn last(&self, n: usize) -> Vec<DecorationEvent> {
        let all = self.events.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Ranges most recently applied for each live style, keyed by color.
    pub fn painted(&self) -> Vec<(Rgb, Vec<Range<usize>>)> {
        let events = self.events.lock();
        let mut live: Vec<(StyleId, Rgb, Vec<Range<usize>>)> = Vec::new();
        for event in events.iter() {
            match &event.action {
                DecorationAction::Create { style, rgb } => live.push((*style, *rgb, Vec::new())),
                DecorationAction::Apply { style, ranges } => {
                    if let Some(entry) = live.iter_mut().find(|(id, _, _)| id == style) {
                        entry.2 = ranges.clone();
                    }
                }
                DecorationAction::Release { style } => live.retain(|(id, _, _)| id != style),
            }
        }
        live.into_iter().map(|(_, rgb, ranges)| (rgb, ranges)).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Default for DecorationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DecorationLog {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            next_style: Arc::clone(&self.next_style),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

impl RenderSink for DecorationLog {
    type Style = StyleId;

    fn create_style(&mut self, rgb: Rgb) -> StyleId {
        let style = StyleId(self.next_style.fetch_add(1, Ordering::Relaxed));
        self.record(DecorationAction::Create { style, rgb });
        style
    }

    fn apply(&mut self, style: &StyleId, ranges: &[Range<usize>]) {
        self.record(DecorationAction::Apply {
            style: *style,
            ranges: ranges.to_vec(),
        });
    }

    fn release(&mut self, style: StyleId) {
        self.record(DecorationAction::Release { style });
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
