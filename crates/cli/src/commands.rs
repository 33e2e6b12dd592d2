// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand execution.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use ansi_swatch_core::{
    closest_named_code, closest_palette_index, color_distance, palette_color, pick_items, replace,
    resolve_color, ColorTarget, Rgb, Scanner, SequenceKind, SequenceMatch,
};
use ansi_swatch_decor::{DecorationLog, DecorationManager};

use crate::cli::{Cli, Command, OutputFormat, TargetArgs};
use crate::config::{ConfigError, Settings};
use crate::output::{
    print_debug, print_warning, ClosestReport, HoverReport, OutputWriter, PaletteEntry,
    RecolorReport, SequenceRow,
};
use crate::terminal::TerminalSink;

/// Errors that end a command
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no color sequence at byte offset {offset}")]
    NoSequence { offset: usize },

    #[error("one of --code, --index or --color is required")]
    MissingTarget,
}

/// Resolve settings and run the parsed command against stdin/stdout.
pub fn run(cli: &Cli) -> Result<(), CommandError> {
    let settings = Settings::from_cli(cli)?;
    if let Some(path) = &settings.source {
        print_debug(
            settings.verbose,
            format_args!("loaded config from {}", path.display()),
        );
    }
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(&cli.command, &settings, &mut stdin.lock(), stdout.lock())
}

/// Run `command` reading documents from `input` when no file is given.
pub fn execute<R: Read, W: Write>(
    command: &Command,
    settings: &Settings,
    input: &mut R,
    out: W,
) -> Result<(), CommandError> {
    let mut writer = OutputWriter::new(out, settings.format);
    match command {
        Command::Scan { file } => {
            let text = read_input(file.as_deref(), input, settings)?;
            scan(&text, settings, &mut writer)
        }
        Command::At { file, offset } => {
            let text = read_input(file.as_deref(), input, settings)?;
            let m = find(&text, *offset, settings)?;
            writer.write_hover(&HoverReport::new(&text, &m))?;
            Ok(())
        }
        Command::Recolor {
            file,
            offset,
            target,
            output,
        } => {
            let text = read_input(file.as_deref(), input, settings)?;
            recolor(&text, *offset, target, output.as_deref(), settings, &mut writer)
        }
        Command::Closest { color, palette } => {
            writer.write_closest(&closest(*color, *palette))?;
            Ok(())
        }
        Command::Palette { all } => {
            if *all {
                let entries: Vec<PaletteEntry> = (0..=u8::MAX)
                    .map(|index| PaletteEntry {
                        index,
                        rgb: palette_color(index),
                    })
                    .collect();
                writer.write_palette(&entries)?;
            } else {
                writer.write_pick_items(&pick_items(None))?;
            }
            Ok(())
        }
        Command::Decorate { file, log } => {
            let text = read_input(file.as_deref(), input, settings)?;
            decorate(&text, log.as_deref(), settings, &mut writer)
        }
    }
}

/// Read the document from `file`, or from `input` when `file` is absent or `-`.
fn read_input<R: Read>(
    file: Option<&Path>,
    input: &mut R,
    settings: &Settings,
) -> Result<String, CommandError> {
    let text = match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CommandError::Read {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut text = String::new();
            input.read_to_string(&mut text)?;
            text
        }
    };
    if text.is_empty() {
        print_debug(settings.verbose, "input is empty");
    }
    Ok(text)
}

fn find(text: &str, offset: usize, settings: &Settings) -> Result<SequenceMatch, CommandError> {
    Scanner::new(settings.patterns())
        .match_at(text, offset)
        .ok_or(CommandError::NoSequence { offset })
}

fn scan<W: Write>(
    text: &str,
    settings: &Settings,
    writer: &mut OutputWriter<W>,
) -> Result<(), CommandError> {
    let matches = Scanner::new(settings.patterns()).scan(text);
    let total = matches.len();
    let rows: Vec<SequenceRow> = matches
        .iter()
        .filter(|m| settings.show_unresolved || resolve_color(m).is_some())
        .map(|m| SequenceRow::new(text, m))
        .collect();
    print_debug(
        settings.verbose,
        format_args!("{} sequences, {} listed", total, rows.len()),
    );
    writer.write_scan(&rows)?;
    Ok(())
}

fn recolor<W: Write>(
    text: &str,
    offset: usize,
    target: &TargetArgs,
    output: Option<&Path>,
    settings: &Settings,
    writer: &mut OutputWriter<W>,
) -> Result<(), CommandError> {
    let m = find(text, offset, settings)?;
    let target = target.target()?;
    if let (ColorTarget::Code(code), false) =
        (&target, matches!(m.kind, SequenceKind::Basic { .. }))
    {
        print_warning(format_args!(
            "rewriting {} sequence as basic code {}",
            m.class(),
            code
        ));
    }

    let replacement = replace(&m, &target);
    let document = splice(text, &m, &replacement);
    let report = RecolorReport {
        range: m.range.clone(),
        changed: replacement != m.text,
        original: m.text,
        replacement,
    };
    print_debug(
        settings.verbose,
        format_args!("{:?} -> {:?}", report.original, report.replacement),
    );

    match output {
        Some(path) => {
            std::fs::write(path, &document).map_err(|source| CommandError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            if writer.format() == OutputFormat::Json {
                writer.write_recolor(&report, &document)?;
            }
        }
        None => writer.write_recolor(&report, &document)?,
    }
    Ok(())
}

fn splice(text: &str, m: &SequenceMatch, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..m.range.start]);
    out.push_str(replacement);
    out.push_str(&text[m.range.end..]);
    out
}

fn closest(color: Rgb, palette: bool) -> ClosestReport {
    if palette {
        let index = closest_palette_index(color);
        let rgb = palette_color(index);
        ClosestReport::Palette {
            index,
            rgb,
            distance: color_distance(color, rgb),
        }
    } else {
        let entry = closest_named_code(color);
        ClosestReport::named(entry, color_distance(color, entry.rgb))
    }
}

fn decorate<W: Write>(
    text: &str,
    log: Option<&Path>,
    settings: &Settings,
    writer: &mut OutputWriter<W>,
) -> Result<(), CommandError> {
    let sink = match log {
        Some(path) => {
            let log = DecorationLog::with_file(path).map_err(|source| CommandError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            TerminalSink::with_log(settings.marker.clone(), log)
        }
        None => TerminalSink::new(settings.marker.clone()),
    };

    let mut manager = DecorationManager::with_patterns(sink, settings.patterns());
    let colored = manager.update(text);
    print_debug(
        settings.verbose,
        format_args!(
            "{} colored sequences in {} styles",
            colored,
            manager.styles().len()
        ),
    );

    let painted = manager.sink().painted();
    let decorated = manager.sink().render(text);
    manager.dispose();

    writer.write_decorated(&painted, &decorated)?;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
