// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host-neutral presentation data: hover details and the color pick list.

use crate::palette::{code_label, NAMED_CODES};
use crate::resolve::resolve_color;
use crate::sequence::{SequenceKind, SequenceMatch};
use serde::Serialize;

/// What a hover popup shows for one sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HoverInfo {
    /// The sequence text as written in the document.
    pub code: String,
    /// Color or reset label, when the code has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// `#rrggbb`, when the sequence resolves to a color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl HoverInfo {
    /// Markdown body for a hover popup.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("**ANSI Color Code**: `{}`\n\n", self.code);
        if let Some(label) = &self.label {
            out.push_str(&format!("**Color**: {label}\n\n"));
        }
        match &self.hex {
            Some(hex) => out.push_str(&format!("**Hex Value**: `{hex}`\n\n")),
            None => out.push_str("**Hex Value**: unresolved\n\n"),
        }
        out
    }
}

pub fn hover_info(m: &SequenceMatch) -> HoverInfo {
    let label = match &m.kind {
        SequenceKind::Basic { .. } => m.code_value().and_then(code_label).map(str::to_string),
        SequenceKind::Indexed { index, .. } => Some(format!("Palette {index}")),
        SequenceKind::TrueColor { .. } => Some("True Color".to_string()),
    };
    HoverInfo {
        code: m.text.clone(),
        label,
        hex: resolve_color(m).map(|rgb| rgb.to_hex()),
    }
}

/// One row of the named-color pick list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PickItem {
    pub code: u8,
    /// `\033[<code>m`
    pub label: String,
    pub description: String,
    /// `Color: #rrggbb`
    pub detail: String,
    pub picked: bool,
}

/// Pick list over every named code, marking `current` as picked.
pub fn pick_items(current: Option<&str>) -> Vec<PickItem> {
    let current = current.and_then(|code| code.parse::<u8>().ok());
    NAMED_CODES
        .iter()
        .map(|entry| PickItem {
            code: entry.code,
            label: format!("\\033[{}m", entry.code),
            description: entry.name.to_string(),
            detail: format!("Color: {}", entry.rgb),
            picked: current == Some(entry.code),
        })
        .collect()
}

#[cfg(test)]
#[path = "present_tests.rs"]
mod tests;
