//! Theme configuration for the viewer.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::PanelKind;
use crate::settings::ThemeChoice;

/// Color and style theme for the viewer.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for titles and overlays.
    pub highlight: Color,
    /// Line color for the elapsed-time panel.
    pub timing: Color,
    /// Line color for success panels.
    pub success: Color,
    /// Color used when a panel shows failures.
    pub failure: Color,
    /// Color for panel borders.
    pub border: Color,
    /// Style for axis titles and labels.
    pub axis: Style,
    /// Style for overlay headings.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            timing: Color::Cyan,
            success: Color::Green,
            failure: Color::Red,
            border: Color::Gray,
            axis: Style::default().fg(Color::Gray),
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            timing: Color::Blue,
            success: Color::Green,
            failure: Color::Red,
            border: Color::DarkGray,
            axis: Style::default().fg(Color::DarkGray),
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a configured theme choice.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Line style for a panel, red when any package in it failed.
    pub fn line_style(&self, kind: PanelKind, has_failures: bool) -> Style {
        match kind {
            PanelKind::ElapsedTime => Style::default().fg(self.timing),
            _ if has_failures => Style::default().fg(self.failure),
            _ => Style::default().fg(self.success),
        }
    }
}
