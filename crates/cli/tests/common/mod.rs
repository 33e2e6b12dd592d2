// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// The built binary with the ansi-swatch environment cleared.
pub fn swatch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ansi-swatch"));
    cmd.env_remove("ANSI_SWATCH_CONFIG")
        .env_remove("ANSI_SWATCH_DEBUG");
    cmd
}

/// Temporary file holding `content`, with the given extension.
pub fn write_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// A small log excerpt using every prefix spelling.
pub const SAMPLE: &str = "\
boot \\033[1;32mOK\\033[0m
warn \\x1b[38;5;208mslow disk\\x1b[0m
fail \\e[48;2;200;30;30mpanic\\e[0m
raw \u{1b}[94mblue\u{1b}[0m
";
