//! Common UI components around the chart area.
//!
//! This module contains the header bar, status bar, help overlay and the
//! "terminal too small" notice.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::DerivedSeries;

/// Render the header bar with trace overview.
///
/// Displays: status indicator, source, variant, panel count and per-panel
/// delivery summaries.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let figure = &app.figure;

    let any_failures = figure.panels.iter().any(|p| p.has_failures());
    let status_style = if any_failures {
        Style::default().fg(app.theme.failure)
    } else {
        Style::default().fg(app.theme.success)
    };

    let packages = figure.package_count();

    let mut spans = vec![
        Span::styled(" ● ", status_style),
        Span::styled("PACKET DOCTOR ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(app.source_description().to_string()),
        Span::raw(" │ "),
        Span::raw(figure.variant.label()),
        Span::raw(" │ "),
        Span::styled(
            format!("{}", packages),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" packages"),
    ];

    for panel in &figure.panels {
        let Some(series) = &panel.series else {
            continue;
        };
        let style = if series.failure_count() > 0 {
            Style::default().fg(app.theme.failure)
        } else {
            Style::default().fg(app.theme.success)
        };
        spans.push(Span::raw(format!(" │ {} ", panel.kind.short_label())));
        spans.push(Span::styled(format_ratio(series), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Format a delivery ratio, e.g. `3/4 (75.0%)`.
pub fn format_ratio(series: &DerivedSeries) -> String {
    match series.success_ratio() {
        Some(ratio) => format!(
            "{}/{} ({:.1}%)",
            series.success_count(),
            series.len(),
            ratio * 100.0
        ),
        None => "-".to_string(),
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        " {} panel{} | ?:help q:quit",
        app.figure.panels.len(),
        if app.figure.panels.len() == 1 { "" } else { "s" }
    );
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render a notice when the terminal is below the minimum usable size.
pub fn render_too_small(frame: &mut Frame, area: Rect, min_width: u16, min_height: u16) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, min_width, min_height
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    let centered = Rect::new(
        area.x,
        area.y + (area.height / 2).saturating_sub(2),
        area.width,
        5u16.min(area.height),
    );
    frame.render_widget(paragraph, centered);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the charts.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  ?         Toggle this help"),
        Line::from("  q / Esc   Close the viewer"),
        Line::from("  Ctrl-C    Close the viewer"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Panels",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Success panels plot 1 for a delivered"),
        Line::from("  package and 0 for a failed one."),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 44u16.min(area.width.saturating_sub(4));
    let help_height = 13u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
