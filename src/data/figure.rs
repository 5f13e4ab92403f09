//! Explicit figure layout: which panels to draw and how their axes look.
//!
//! A [`Figure`] is built once from a [`RawInput`] and handed to the renderer,
//! so rendering never depends on any shared drawing state.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::series::{derive_series, derive_series_or_default, DerivedSeries};
use crate::error::TraceError;
use crate::source::RawInput;

/// X-axis title shared by every panel.
pub const X_LABEL: &str = "Package number";

/// Y-axis range for 0/1 success panels, with a little headroom around both values.
pub const BINARY_Y_BOUNDS: [f64; 2] = [-0.1, 1.1];

/// How empty failure lists are handled and how many panels are laid out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Elapsed time plus one panel per non-empty failure list (up to three).
    #[default]
    ThreePanel,
    /// Exactly two panels; an empty failure list is drawn as all successes.
    TwoPanel,
}

impl Variant {
    /// Returns the display label for this variant.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::ThreePanel => "three-panel",
            Variant::TwoPanel => "two-panel",
        }
    }
}

/// What a panel plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    /// MCU encryption time per package.
    ElapsedTime,
    /// Whether the network server could decrypt each package.
    DecryptFailure,
    /// Whether the gateway forwarded each package.
    GatewayMissed,
}

impl PanelKind {
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::ElapsedTime => "MCU time encryption interval",
            PanelKind::DecryptFailure => "Network server decrypt package",
            PanelKind::GatewayMissed => "Network server failed to get package",
        }
    }

    /// Short name for the header bar.
    pub fn short_label(&self) -> &'static str {
        match self {
            PanelKind::ElapsedTime => "timing",
            PanelKind::DecryptFailure => "decrypt",
            PanelKind::GatewayMissed => "gateway",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            PanelKind::ElapsedTime => "Time (us)",
            PanelKind::DecryptFailure | PanelKind::GatewayMissed => "Success rate",
        }
    }
}

/// One chart area of the figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// `(package number, value)` pairs in package order.
    pub points: Vec<(f64, f64)>,
    /// A tick at every package number.
    pub x_ticks: Vec<u64>,
    pub y_ticks: Vec<f64>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Set when the panel shows the all-success default for an empty list.
    pub fallback: bool,
    /// Indicator series behind a success panel; `None` for the time panel.
    #[serde(skip)]
    pub series: Option<DerivedSeries>,
}

impl Panel {
    /// Panel for the elapsed-time series.
    pub fn elapsed_time(elapsed: &[f64]) -> Self {
        let x_ticks: Vec<u64> = (1..=elapsed.len() as u64).collect();
        let points = x_ticks.iter().zip(elapsed).map(|(&x, &y)| (x as f64, y)).collect();

        let min = elapsed.iter().copied().fold(f64::INFINITY, f64::min);
        let max = elapsed.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let (y_ticks, y_bounds) = if min < max {
            let pad = (max - min) * 0.05;
            (vec![min, (min + max) / 2.0, max], [min - pad, max + pad])
        } else {
            (vec![min], [min - 1.0, min + 1.0])
        };

        let kind = PanelKind::ElapsedTime;
        Self {
            kind,
            title: kind.title(),
            x_label: X_LABEL,
            y_label: kind.y_label(),
            points,
            x_bounds: x_bounds(&x_ticks),
            x_ticks,
            y_ticks,
            y_bounds,
            fallback: false,
            series: None,
        }
    }

    /// Panel for a derived 0/1 success series.
    pub fn success(kind: PanelKind, series: &DerivedSeries, fallback: bool) -> Self {
        let points = series.x.iter().zip(&series.y).map(|(&x, &y)| (x as f64, y as f64)).collect();
        Self {
            kind,
            title: kind.title(),
            x_label: X_LABEL,
            y_label: kind.y_label(),
            points,
            x_bounds: x_bounds(&series.x),
            x_ticks: series.x.clone(),
            y_ticks: vec![0.0, 1.0],
            y_bounds: BINARY_Y_BOUNDS,
            fallback,
            series: Some(series.clone()),
        }
    }

    /// `(delivered, total)` for success panels, `None` for the time panel.
    pub fn success_summary(&self) -> Option<(usize, usize)> {
        self.series.as_ref().map(|s| (s.success_count(), s.len()))
    }

    /// True when a success panel marks at least one package as failed.
    pub fn has_failures(&self) -> bool {
        self.series.as_ref().is_some_and(|s| s.failure_count() > 0)
    }
}

/// Ticks span the x range exactly; a single tick gets half a package either side.
fn x_bounds(ticks: &[u64]) -> [f64; 2] {
    match (ticks.first(), ticks.last()) {
        (Some(&first), Some(&last)) if first < last => [first as f64, last as f64],
        (Some(&only), _) => [only as f64 - 0.5, only as f64 + 0.5],
        _ => [0.0, 1.0],
    }
}

/// The full set of vertically stacked panels to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub variant: Variant,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Lay out panels for a trace.
    ///
    /// # Example
    ///
    /// ```
    /// use packet_doctor::{Figure, RawInput, Variant};
    ///
    /// let input = RawInput::from_json("[[10, 12, 9], [1, 3], []]").unwrap();
    /// let figure = Figure::build(&input, Variant::ThreePanel).unwrap();
    /// assert_eq!(figure.panels.len(), 2);
    /// ```
    pub fn build(input: &RawInput, variant: Variant) -> Result<Self, TraceError> {
        if input.elapsed.is_empty() {
            return Err(TraceError::EmptyInput);
        }

        let mut panels = vec![Panel::elapsed_time(&input.elapsed)];

        match variant {
            Variant::ThreePanel => {
                if let Some(series) = derive_series(&input.failures) {
                    panels.push(Panel::success(PanelKind::DecryptFailure, &series, false));
                }
                if let Some(series) = input.gateway_missed.as_deref().and_then(derive_series) {
                    panels.push(Panel::success(PanelKind::GatewayMissed, &series, false));
                }
            }
            Variant::TwoPanel => {
                if input.gateway_missed.is_some() {
                    warn!("two-panel layout ignores the gateway-missed sequence");
                }
                let fallback = input.failures.is_empty();
                let series = derive_series_or_default(&input.failures, input.elapsed.len());
                panels.push(Panel::success(PanelKind::DecryptFailure, &series, fallback));
            }
        }

        debug!(variant = variant.label(), panels = panels.len(), "figure laid out");
        Ok(Self { variant, panels })
    }

    /// Find the first panel of the given kind.
    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// Number of packages in the elapsed-time series.
    pub fn package_count(&self) -> usize {
        self.panel(PanelKind::ElapsedTime).map_or(0, |p| p.points.len())
    }

    /// Pretty JSON rendering of the laid-out figure, as printed by `--dump`.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
