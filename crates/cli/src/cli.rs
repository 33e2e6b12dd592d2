// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument parsing.

use std::path::PathBuf;

use ansi_swatch_core::{ColorTarget, EscapePrefix, Rgb};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::CommandError;

/// Find, inspect and recolor escaped ANSI color sequences
#[derive(Parser, Debug, Clone)]
#[command(name = "ansi-swatch", version, about)]
pub struct Cli {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Escape prefix to recognize: octal, hex, short or literal.
    /// Can be given multiple times; defaults to all of them.
    #[arg(long = "prefix", global = true, value_name = "PREFIX")]
    pub prefixes: Vec<EscapePrefix>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every sequence with its class, prefix and color
    Scan {
        /// Input file; stdin when absent or `-`
        file: Option<PathBuf>,
    },

    /// Show hover details for the sequence at a byte offset
    At {
        file: Option<PathBuf>,

        /// Byte offset into the input
        #[arg(long)]
        offset: usize,
    },

    /// Rewrite the sequence at a byte offset with a new color
    Recolor {
        file: Option<PathBuf>,

        #[arg(long)]
        offset: usize,

        #[command(flatten)]
        target: TargetArgs,

        /// Write the edited document here instead of stdout
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Nearest named code (or palette index) for a color
    Closest {
        /// `#rrggbb`, `rrggbb` or `#rgb`
        #[arg(long)]
        color: Rgb,

        /// Search the 256-color palette instead of the named codes
        #[arg(long)]
        palette: bool,
    },

    /// List the named color codes
    Palette {
        /// List all 256 palette entries instead
        #[arg(long)]
        all: bool,
    },

    /// Echo the input with a color badge before each colored sequence
    Decorate {
        file: Option<PathBuf>,

        /// Record render calls to a JSONL file
        #[arg(long, value_name = "PATH")]
        log: Option<PathBuf>,
    },
}

/// New color for `recolor`; exactly one must be given.
#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Basic SGR code, written verbatim (e.g. 32)
    #[arg(long, value_parser = parse_code)]
    pub code: Option<String>,

    /// 256-color palette index
    #[arg(long)]
    pub index: Option<u8>,

    /// Arbitrary color; basic sequences get the nearest named code
    #[arg(long)]
    pub color: Option<Rgb>,
}

impl TargetArgs {
    pub fn target(&self) -> Result<ColorTarget, CommandError> {
        if let Some(code) = &self.code {
            return Ok(ColorTarget::Code(code.clone()));
        }
        if let Some(index) = self.index {
            return Ok(ColorTarget::PaletteIndex(index));
        }
        if let Some(rgb) = self.color {
            return Ok(ColorTarget::Rgb(rgb));
        }
        Err(CommandError::MissingTarget)
    }
}

fn parse_code(s: &str) -> Result<String, String> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        Ok(s.to_string())
    } else {
        Err(format!("'{s}' is not a numeric SGR code"))
    }
}

/// Output format for command results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
