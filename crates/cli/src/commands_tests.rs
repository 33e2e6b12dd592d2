// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::config::DEFAULT_MARKER;
use ansi_swatch_core::EscapePrefix;
use rstest::rstest;
use std::io::Cursor;

fn settings(format: OutputFormat) -> Settings {
    Settings {
        prefixes: EscapePrefix::ALL.to_vec(),
        format,
        marker: DEFAULT_MARKER.to_string(),
        show_unresolved: true,
        verbose: false,
        source: None,
    }
}

fn run_with(command: Command, settings: &Settings, input: &str) -> Result<String, CommandError> {
    let mut out = Vec::new();
    execute(&command, settings, &mut Cursor::new(input), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn target(code: Option<&str>, index: Option<u8>, color: Option<Rgb>) -> TargetArgs {
    TargetArgs {
        code: code.map(str::to_string),
        index,
        color,
    }
}

// =============================================================================
// scan
// =============================================================================

#[test]
fn test_scan_reads_stdin() {
    let out = run_with(
        Command::Scan { file: None },
        &settings(OutputFormat::Text),
        "\\033[1;31mERROR\\033[0m",
    )
    .unwrap();
    assert_eq!(out.lines().count(), 2);
    assert!(out.starts_with("1:1  with_attributes  octal"));
}

#[test]
fn test_scan_dash_means_stdin() {
    let out = run_with(
        Command::Scan {
            file: Some(PathBuf::from("-")),
        },
        &settings(OutputFormat::Text),
        "\\e[32m",
    )
    .unwrap();
    assert!(out.contains("#00ff00"));
}

#[test]
fn test_scan_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    std::fs::write(&path, "ok \\x1b[38;2;1;2;3m").unwrap();

    let out = run_with(
        Command::Scan { file: Some(path) },
        &settings(OutputFormat::Json),
        "",
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["class"], "true_color");
    assert_eq!(json[0]["hex"], "#010203");
}

#[test]
fn test_scan_missing_file_names_path() {
    let err = run_with(
        Command::Scan {
            file: Some(PathBuf::from("/nonexistent/input.txt")),
        },
        &settings(OutputFormat::Text),
        "",
    )
    .unwrap_err();
    assert!(matches!(err, CommandError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/input.txt"));
}

#[test]
fn test_scan_hides_unresolved_when_configured() {
    let mut s = settings(OutputFormat::Json);
    s.show_unresolved = false;
    let out = run_with(Command::Scan { file: None }, &s, "\\033[1;31mERROR\\033[0m").unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["label"], "Red");
}

#[test]
fn test_scan_respects_prefix_restriction() {
    let mut s = settings(OutputFormat::Json);
    s.prefixes = vec![EscapePrefix::Short];
    let out = run_with(Command::Scan { file: None }, &s, "\\033[31m \\e[32m").unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["prefix"], "short");
}

#[test]
fn test_scan_empty_input() {
    let out = run_with(Command::Scan { file: None }, &settings(OutputFormat::Json), "").unwrap();
    assert_eq!(out, "[]\n");
}

// =============================================================================
// at
// =============================================================================

#[rstest]
#[case(0)]
#[case(5)]
#[case(8)]
fn test_at_finds_sequence(#[case] offset: usize) {
    let out = run_with(
        Command::At { file: None, offset },
        &settings(OutputFormat::Json),
        "\\033[33mwarn",
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["label"], "Yellow");
    assert_eq!(json["hex"], "#ffff00");
}

#[test]
fn test_at_without_sequence_is_error() {
    let err = run_with(
        Command::At {
            file: None,
            offset: 10,
        },
        &settings(OutputFormat::Text),
        "\\033[33mwarn",
    )
    .unwrap_err();
    assert!(matches!(err, CommandError::NoSequence { offset: 10 }));
    assert_eq!(err.to_string(), "no color sequence at byte offset 10");
}

// =============================================================================
// recolor
// =============================================================================

#[rstest]
#[case(target(Some("32"), None, None), "a \\033[1;32mERROR\\033[0m")]
#[case(target(None, Some(21), None), "a \\033[1;34mERROR\\033[0m")]
#[case(target(None, None, Some(Rgb::new(250, 250, 0))), "a \\033[1;33mERROR\\033[0m")]
#[case(target(None, None, Some(Rgb::new(255, 0, 0))), "a \\033[1;31mERROR\\033[0m")]
fn test_recolor_basic(#[case] new: TargetArgs, #[case] expected: &str) {
    let out = run_with(
        Command::Recolor {
            file: None,
            offset: 3,
            target: new,
            output: None,
        },
        &settings(OutputFormat::Text),
        "a \\033[1;31mERROR\\033[0m",
    )
    .unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_recolor_true_color_keeps_prefix() {
    let out = run_with(
        Command::Recolor {
            file: None,
            offset: 0,
            target: target(None, None, Some(Rgb::new(9, 8, 7))),
            output: None,
        },
        &settings(OutputFormat::Text),
        "\\e[48;2;1;2;3m!",
    )
    .unwrap();
    assert_eq!(out, "\\e[48;2;9;8;7m!");
}

#[test]
fn test_recolor_json_reports_edit() {
    let out = run_with(
        Command::Recolor {
            file: None,
            offset: 0,
            target: target(None, Some(208), None),
            output: None,
        },
        &settings(OutputFormat::Json),
        "\\x1b[38;5;1m",
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["original"], "\\x1b[38;5;1m");
    assert_eq!(json["replacement"], "\\x1b[38;5;208m");
    assert_eq!(json["changed"], true);
}

#[test]
fn test_recolor_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.txt");
    let out = run_with(
        Command::Recolor {
            file: None,
            offset: 0,
            target: target(Some("44"), None, None),
            output: Some(output.clone()),
        },
        &settings(OutputFormat::Text),
        "\\033[41m bg",
    )
    .unwrap();
    assert_eq!(out, "");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "\\033[44m bg");
}

#[test]
fn test_recolor_missing_target() {
    let err = run_with(
        Command::Recolor {
            file: None,
            offset: 0,
            target: TargetArgs::default(),
            output: None,
        },
        &settings(OutputFormat::Text),
        "\\033[41m",
    )
    .unwrap_err();
    assert!(matches!(err, CommandError::MissingTarget));
}

#[test]
fn test_recolor_without_sequence() {
    let err = run_with(
        Command::Recolor {
            file: None,
            offset: 2,
            target: target(Some("31"), None, None),
            output: None,
        },
        &settings(OutputFormat::Text),
        "plain",
    )
    .unwrap_err();
    assert!(matches!(err, CommandError::NoSequence { offset: 2 }));
}

// =============================================================================
// closest / palette
// =============================================================================

#[rstest]
#[case(Rgb::new(250, 10, 10), false, "31  Red  #ff0000")]
#[case(Rgb::new(255, 135, 0), true, "208  #ff8700  distance 0.00")]
#[case(Rgb::new(0x80, 0x80, 0x80), false, "90  Bright Black  #808080  distance 0.00")]
fn test_closest(#[case] color: Rgb, #[case] palette: bool, #[case] expected: &str) {
    let out = run_with(
        Command::Closest { color, palette },
        &settings(OutputFormat::Text),
        "",
    )
    .unwrap();
    assert!(out.starts_with(expected), "{out}");
}

#[test]
fn test_palette_named() {
    let out = run_with(
        Command::Palette { all: false },
        &settings(OutputFormat::Json),
        "",
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 32);
    assert_eq!(json[31]["code"], 107);
}

#[test]
fn test_palette_all() {
    let out = run_with(
        Command::Palette { all: true },
        &settings(OutputFormat::Text),
        "",
    )
    .unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 256);
    assert_eq!(lines[16], " 16  #000000");
    assert_eq!(lines[255], "255  #eeeeee");
}

// =============================================================================
// decorate
// =============================================================================

#[test]
fn test_decorate_text() {
    let mut s = settings(OutputFormat::Text);
    s.marker = "#".to_string();
    let out = run_with(Command::Decorate { file: None, log: None }, &s, "x \\e[31my").unwrap();
    assert_eq!(out, "x \x1b[38;2;255;0;0m#\x1b[0m\\e[31my");
}

#[test]
fn test_decorate_json_and_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("decor.jsonl");
    let out = run_with(
        Command::Decorate {
            file: None,
            log: Some(log.clone()),
        },
        &settings(OutputFormat::Json),
        "\\e[31m \\e[32m \\e[31m",
    )
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);

    let content = std::fs::read_to_string(&log).unwrap();
    let actions: Vec<String> = content
        .lines()
        .map(|line| {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            v["action"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(
        actions,
        vec!["create", "create", "apply", "apply", "release", "release"]
    );
}

#[test]
fn test_decorate_log_in_missing_directory() {
    let err = run_with(
        Command::Decorate {
            file: None,
            log: Some(PathBuf::from("/nonexistent/dir/decor.jsonl")),
        },
        &settings(OutputFormat::Text),
        "",
    )
    .unwrap_err();
    assert!(matches!(err, CommandError::Write { .. }));
}

mod splice_properties {
    use super::*;
    use proptest::prelude::*;

    fn document() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                prop::sample::select(vec!["\\033[31m", "\\x1b[1;42m", "\\e[38;5;9m", "\u{1b}[0m"])
                    .prop_map(str::to_string),
                "[a-zé \n]{0,6}",
            ],
            0..12,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn splice_only_touches_the_match(text in document(), replacement in "[a-z\\\\\\[0-9;]{0,12}") {
            for m in ansi_swatch_core::scan(&text) {
                let out = splice(&text, &m, &replacement);
                prop_assert!(out.starts_with(&text[..m.range.start]));
                prop_assert!(out.ends_with(&text[m.range.end..]));
                prop_assert_eq!(out.len(), text.len() - m.range.len() + replacement.len());
                prop_assert_eq!(&out[m.range.start..m.range.start + replacement.len()], replacement.as_str());
                prop_assert_eq!(splice(&text, &m, &m.text), text.clone());
            }
        }
    }
}
