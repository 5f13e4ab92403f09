// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # packet-doctor
//!
//! A diagnostic viewer for LoRa packet telemetry traces.
//!
//! A trace is one line of JSON holding the MCU encryption time of every
//! package plus the package numbers the network server failed to decrypt and,
//! optionally, the package numbers the gateway missed. The viewer turns the
//! failure lists into 0/1 success series and draws everything as vertically
//! stacked charts in the terminal.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐  │
//! │  │ source  │───▶│   data   │───▶│   app   │───▶│    ui    │  │
//! │  │ (stdin) │    │ (figure) │    │ (state) │    │(ratatui) │  │
//! │  └─────────┘    └──────────┘    └─────────┘    └──────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`source`]**: Reads one JSON line and checks its shape ([`RawInput`])
//! - **[`data`]**: Success series derivation and panel layout ([`Figure`])
//! - **[`app`]**: Viewer state (help overlay, running flag)
//! - **[`ui`]**: Chart, header and overlay rendering
//! - **[`settings`]**: Layered configuration ([`Settings`])
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! echo '[[10,12,9],[1,3],[2]]' | packet-doctor
//! echo '[[5,5,5,5],[]]' | packet-doctor --variant two-panel
//! echo '[[10,12,9],[1,3],[]]' | packet-doctor --dump
//! ```
//!
//! ### As a library
//!
//! ```
//! use std::io::Cursor;
//! use packet_doctor::{Figure, LineSource, Variant};
//!
//! let mut source = LineSource::new(Cursor::new("[[5, 5, 5, 5], [2, 4]]\n"), "memory");
//! let input = source.read().unwrap();
//! let figure = Figure::build(&input, Variant::TwoPanel).unwrap();
//!
//! let (delivered, total) = figure.panels[1].success_summary().unwrap();
//! assert_eq!((delivered, total), (2, 4));
//! ```

pub mod app;
pub mod data;
pub mod error;
pub mod events;
pub mod settings;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{DerivedSeries, Figure, Panel, PanelKind, Variant};
pub use error::TraceError;
pub use settings::{Settings, ThemeChoice};
pub use source::{LineSource, RawInput};
