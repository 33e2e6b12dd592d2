// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ansi-swatch binary entry point.

use clap::Parser;

use ansi_swatch::cli::Cli;
use ansi_swatch::commands;
use ansi_swatch::output::print_error;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::run(&cli) {
        print_error(e);
        std::process::exit(1);
    }
}
