// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Support code for the `cgm` command-line tool.
//!
//! The binary itself only parses arguments and dispatches; persisted
//! preferences and the text/JSON renderings of results live here so they can
//! be tested without spawning a process.
#![forbid(unsafe_code)]

/// Config storage port, JSON service and filesystem store.
pub mod config;
/// User preferences persisted between runs.
pub mod prefs;
/// Plain-text and JSON renderings of command results.
pub mod report;
