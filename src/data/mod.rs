//! Data models and processing for telemetry traces.
//!
//! This module turns a parsed [`RawInput`](crate::source::RawInput) into the
//! explicit [`Figure`] the viewer draws.
//!
//! ## Submodules
//!
//! - [`series`]: 0/1 success series derived from lists of failed package numbers
//! - [`figure`]: Panel layout ([`Figure`], [`Panel`], [`Variant`])
//!
//! ## Data Flow
//!
//! ```text
//! RawInput (one JSON line)
//!        │
//!        ▼
//! Figure::build(variant)
//!        │
//!        ├──▶ Panel::elapsed_time (always)
//!        │
//!        └──▶ derive_series ──▶ Panel::success (per failure list)
//! ```

pub mod figure;
pub mod series;

pub use figure::{Figure, Panel, PanelKind, Variant, BINARY_Y_BOUNDS, X_LABEL};
pub use series::{derive_series, derive_series_or_default, find_missing_packages, DerivedSeries};
