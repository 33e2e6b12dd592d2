// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ansi-swatch command-line host.
//!
//! Reads a document from a file or stdin and drives the detection core and
//! the decoration layer: listing sequences, hover details at an offset,
//! recoloring a sequence in place, nearest-color lookup, palette listing and
//! terminal decoration.

// Internal modules - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod commands;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod output;
#[doc(hidden)]
pub mod output_diagnostic;
#[doc(hidden)]
pub mod terminal;
