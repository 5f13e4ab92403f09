//! Viewer state.

use crate::data::Figure;
use crate::ui::Theme;

/// Main application state.
///
/// The figure is fixed for the lifetime of the viewer; the only state that
/// changes is whether the help overlay is open and whether the viewer has
/// been dismissed.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    pub figure: Figure,
    source: String,

    // UI
    pub theme: Theme,
}

impl App {
    /// Create a viewer for the given figure.
    pub fn new(figure: Figure, source: impl Into<String>, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            figure,
            source: source.into(),
            theme,
        }
    }

    /// Returns a description of where the trace came from.
    pub fn source_description(&self) -> &str {
        &self.source
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the viewer to close.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
