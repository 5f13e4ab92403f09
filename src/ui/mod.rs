//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`chart`]: One line chart per panel, stacked vertically
//! - [`common`]: Shared components (header, status bar, help overlay, size notice)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! The main loop in `main.rs` draws, top to bottom:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Panel 1 (chart::render_panel)        │
//! │ Panel 2 ...                          │
//! │ Panel 3 ...                          │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod chart;
pub mod common;
pub mod theme;

pub use theme::Theme;
