//! Panel rendering.
//!
//! Each [`Panel`] becomes one bordered ratatui [`Chart`]; the figure stacks
//! them vertically in equal shares of the content area.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::app::App;
use crate::data::Panel;

/// Rows taken by borders and the x axis, unavailable for y labels.
const Y_LABEL_OVERHEAD: u16 = 4;
/// Columns taken by borders and y labels, unavailable for x labels.
const X_LABEL_OVERHEAD: u16 = 12;
/// Upper bound on y label slots; more rows than this add no precision.
const MAX_Y_SLOTS: usize = 25;

/// Render every panel of the figure, stacked top to bottom.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let panels = &app.figure.panels;
    if panels.is_empty() {
        return;
    }

    let count = panels.len() as u32;
    let chunks = Layout::vertical(vec![Constraint::Ratio(1, count); panels.len()])
        .spacing(1)
        .split(area);

    for (panel, chunk) in panels.iter().zip(chunks.iter()) {
        render_panel(frame, app, panel, *chunk);
    }
}

/// Render one panel as a line chart with point markers.
pub fn render_panel(frame: &mut Frame, app: &App, panel: &Panel, area: Rect) {
    let summary = panel.success_summary();
    let line_style = app.theme.line_style(panel.kind, panel.has_failures());

    let title = match summary {
        Some(_) if panel.fallback => format!(" {} (no failures reported) ", panel.title),
        Some((ok, total)) => format!(" {}  {}/{} ok ", panel.title, ok, total),
        None => format!(" {} ", panel.title),
    };

    let block = Block::default()
        .title(Span::styled(title, app.theme.header))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(line_style)
            .data(&panel.points),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(line_style)
            .data(&panel.points),
    ];

    let x_ticks: Vec<f64> = panel.x_ticks.iter().map(|&t| t as f64).collect();
    let x_labels = tick_labels(
        panel.x_bounds,
        &x_ticks,
        x_label_slots(&panel.x_ticks, area.width.saturating_sub(X_LABEL_OVERHEAD)),
    );
    let y_slots = (area.height.saturating_sub(Y_LABEL_OVERHEAD) as usize).clamp(2, MAX_Y_SLOTS);
    let y_labels = tick_labels(panel.y_bounds, &panel.y_ticks, y_slots);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled(panel.x_label, app.theme.axis))
                .style(app.theme.axis)
                .bounds(panel.x_bounds)
                .labels(x_labels.into_iter().map(Line::from).collect::<Vec<_>>()),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(panel.y_label, app.theme.axis))
                .style(app.theme.axis)
                .bounds(panel.y_bounds)
                .labels(y_labels.into_iter().map(Line::from).collect::<Vec<_>>()),
        );

    frame.render_widget(chart, area);
}

/// How many x label positions fit in `width` columns.
///
/// Every package number gets a label when there is room; otherwise labels are
/// thinned to evenly spaced positions. A lone tick sits in the middle of three
/// slots so it lines up with its point.
fn x_label_slots(ticks: &[u64], width: u16) -> usize {
    if ticks.len() <= 1 {
        return 3;
    }
    let widest = ticks.iter().map(|t| t.to_string().len()).max().unwrap_or(1);
    let fit = (width as usize / (widest + 1)).max(2);
    ticks.len().min(fit)
}

/// Spread tick labels over `slots` evenly spaced positions across `bounds`.
///
/// The chart widget draws labels at even intervals, so each slot is labelled
/// with the tick nearest its position (within half a slot), or left blank.
/// `ticks` must be sorted ascending.
pub fn tick_labels(bounds: [f64; 2], ticks: &[f64], slots: usize) -> Vec<String> {
    let [lo, hi] = bounds;
    if slots < 2 || hi <= lo {
        return ticks.iter().map(|&t| format_value(t)).collect();
    }

    let step = (hi - lo) / (slots - 1) as f64;
    (0..slots)
        .map(|i| {
            let at = lo + step * i as f64;
            nearest_tick(ticks, at)
                .filter(|t| (t - at).abs() <= step / 2.0)
                .map(format_value)
                .unwrap_or_default()
        })
        .collect()
}

/// The tick closest to `at`, found by binary search over sorted `ticks`.
fn nearest_tick(ticks: &[f64], at: f64) -> Option<f64> {
    let i = ticks.partition_point(|&t| t < at);
    let above = ticks.get(i).copied();
    let below = i.checked_sub(1).and_then(|j| ticks.get(j)).copied();
    match (below, above) {
        (Some(b), Some(a)) if at - b <= a - at => Some(b),
        (_, Some(a)) => Some(a),
        (below, None) => below,
    }
}

/// Format an axis value, dropping the fraction for whole numbers.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Figure, Variant};
    use crate::source::RawInput;
    use crate::ui::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn app(line: &str, variant: Variant) -> App {
        let input = RawInput::from_json(line).unwrap();
        App::new(Figure::build(&input, variant).unwrap(), "test", Theme::dark())
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area)
            })
            .unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_tick_labels_every_package() {
        let labels = tick_labels([1.0, 3.0], &[1.0, 2.0, 3.0], 3);
        assert_eq!(labels, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_tick_labels_binary_axis() {
        let labels = tick_labels([-0.1, 1.1], &[0.0, 1.0], 13);
        assert_eq!(labels.len(), 13);
        assert_eq!(labels[1], "0");
        assert_eq!(labels[11], "1");
        assert_eq!(labels.iter().filter(|l| !l.is_empty()).count(), 2);
    }

    #[test]
    fn test_tick_labels_single_tick_centered() {
        let labels = tick_labels([0.5, 1.5], &[1.0], 3);
        assert_eq!(labels, vec!["", "1", ""]);
    }

    #[test]
    fn test_tick_labels_thinned() {
        let ticks: Vec<f64> = (1..=101).map(|t| t as f64).collect();
        let labels = tick_labels([1.0, 101.0], &ticks, 5);
        assert_eq!(labels, vec!["1", "26", "51", "76", "101"]);
    }

    #[test]
    fn test_nearest_tick() {
        let ticks = [0.0, 1.0, 5.0];
        assert_eq!(nearest_tick(&ticks, -3.0), Some(0.0));
        assert_eq!(nearest_tick(&ticks, 0.4), Some(0.0));
        assert_eq!(nearest_tick(&ticks, 3.5), Some(5.0));
        assert_eq!(nearest_tick(&ticks, 9.0), Some(5.0));
        assert_eq!(nearest_tick(&[], 1.0), None);
    }

    #[test]
    fn test_tick_labels_huge_range() {
        let ticks: Vec<f64> = (1..=3_000_000).map(|t| t as f64).collect();
        let labels = tick_labels([1.0, 3_000_000.0], &ticks, 3);
        assert_eq!(labels, vec!["1", "1500000", "3000000"]);
    }

    #[test]
    fn test_x_label_slots() {
        assert_eq!(x_label_slots(&[1], 80), 3);
        assert_eq!(x_label_slots(&[1, 2, 3], 80), 3);
        let many: Vec<u64> = (1..=500).collect();
        assert_eq!(x_label_slots(&many, 80), 20);
        assert_eq!(x_label_slots(&many, 0), 2);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(-0.1), "-0.1");
    }

    #[test]
    fn test_render_single_panel() {
        let app = app("[[10,12,9], [], []]", Variant::ThreePanel);
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("MCU time encryption interval"));
        assert!(screen.contains("Package number"));
        assert!(!screen.contains("Network server decrypt package"));
    }

    #[test]
    fn test_render_three_panels() {
        let app = app("[[10,12,9], [1,3], [2]]", Variant::ThreePanel);
        let screen = draw(&app, 100, 45);
        assert!(screen.contains("MCU time encryption interval"));
        assert!(screen.contains("Network server decrypt package  1/3 ok"));
        assert!(screen.contains("Network server failed to get package  1/2 ok"));
    }

    #[test]
    fn test_render_fallback_title() {
        let app = app("[[5,5,5,5], []]", Variant::TwoPanel);
        let screen = draw(&app, 100, 30);
        assert!(screen.contains("Network server decrypt package (no failures reported)"));
    }
}
