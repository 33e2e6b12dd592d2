// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host-side decoration for ansi-swatch.
//!
//! The core crate only reports where colors are. This crate turns those
//! reports into render calls against a host-provided [`RenderSink`], keeping
//! one style per distinct color alive across updates.

mod log;
mod manager;
mod sink;

pub use log::{DecorationAction, DecorationEvent, DecorationLog, StyleId};
pub use manager::DecorationManager;
pub use sink::RenderSink;
