use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{BarKind, StepSeries, WaterfallBar, derive_bars};
use crate::error::{ChartError, ChartResult};
use crate::render::{TextHAlign, TextVAlign};

use super::axes::{AxesLayout, BarArtist, LineArtist, TextArtist, validate_limits};
use super::label_format::format_value_label;
use super::style::apply_alpha;
use super::{Axes, BarLabels, PlotOptions};

pub const DEFAULT_METRIC_NAME: &str = "Value";
pub const DEFAULT_LAST_STEP_LABEL: &str = "Final Value";

/// Value labels sit this fraction above the running total.
const LABEL_OFFSET_FACTOR: f64 = 1.02;
/// Headroom above the tallest bar.
const Y_HEADROOM_FACTOR: f64 = 1.1;

/// Waterfall chart over a series of cumulative values.
///
/// Construction validates the series; `plot`/`plot_on` derive the bars and
/// append them to a drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallChart {
    series: StepSeries,
    step_names: Vec<String>,
    metric_name: String,
    last_step_label: String,
}

impl WaterfallChart {
    pub fn new(values: Vec<f64>) -> ChartResult<Self> {
        Ok(Self::from_series(StepSeries::new(values)?))
    }

    pub fn from_decimals(values: &[Decimal]) -> ChartResult<Self> {
        Ok(Self::from_series(StepSeries::from_decimals(values)?))
    }

    #[must_use]
    pub fn from_series(series: StepSeries) -> Self {
        let step_names = (0..series.len()).map(|index| index.to_string()).collect();
        Self {
            series,
            step_names,
            metric_name: DEFAULT_METRIC_NAME.to_owned(),
            last_step_label: DEFAULT_LAST_STEP_LABEL.to_owned(),
        }
    }

    /// Replaces the per-value names; an empty list keeps the index names.
    pub fn with_step_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> ChartResult<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Ok(self);
        }
        if names.len() != self.series.len() {
            return Err(ChartError::InvalidInput(format!(
                "expected {} step names, got {}",
                self.series.len(),
                names.len()
            )));
        }
        self.step_names = names;
        Ok(self)
    }

    /// Sets the value-axis label; an empty name keeps the default.
    #[must_use]
    pub fn with_metric_name(mut self, metric_name: impl Into<String>) -> Self {
        let metric_name = metric_name.into();
        if !metric_name.is_empty() {
            self.metric_name = metric_name;
        }
        self
    }

    /// Sets the name of the appended end bar; an empty label keeps the default.
    #[must_use]
    pub fn with_last_step_label(mut self, last_step_label: impl Into<String>) -> Self {
        let last_step_label = last_step_label.into();
        if !last_step_label.is_empty() {
            self.last_step_label = last_step_label;
        }
        self
    }

    #[must_use]
    pub fn series(&self) -> &StepSeries {
        &self.series
    }

    #[must_use]
    pub fn step_names(&self) -> &[String] {
        &self.step_names
    }

    #[must_use]
    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    #[must_use]
    pub fn last_step_label(&self) -> &str {
        &self.last_step_label
    }

    /// Signed change between consecutive values.
    #[must_use]
    pub fn deltas(&self) -> Vec<f64> {
        self.series.deltas()
    }

    /// Derived bars without value labels.
    pub fn bars(&self) -> ChartResult<Vec<WaterfallBar>> {
        derive_bars(&self.series, &self.step_names, &self.last_step_label)
    }

    /// Derived bars with value labels resolved from `bar_labels`.
    pub fn labeled_bars(
        &self,
        bar_labels: &BarLabels,
        precision: u8,
    ) -> ChartResult<Vec<WaterfallBar>> {
        let mut bars = self.bars()?;
        match bar_labels {
            BarLabels::Hidden => {}
            BarLabels::Values => {
                for bar in &mut bars {
                    bar.label = Some(format_value_label(bar.delta, precision));
                }
            }
            BarLabels::Fixed(text) => {
                for bar in &mut bars {
                    bar.label = Some(text.clone());
                }
            }
            BarLabels::Custom(labels) => {
                if labels.len() != bars.len() {
                    return Err(ChartError::InvalidInput(format!(
                        "expected {} bar labels, got {}",
                        bars.len(),
                        labels.len()
                    )));
                }
                for (bar, label) in bars.iter_mut().zip(labels) {
                    bar.label = Some(label.clone());
                }
            }
        }
        Ok(bars)
    }

    /// Plots onto `axes`, or onto a new surface sized by the options.
    ///
    /// Returns the surface so callers can keep drawing on it.
    pub fn plot(&self, axes: Option<Axes>, options: &PlotOptions) -> ChartResult<Axes> {
        let mut axes = axes.unwrap_or_else(|| Axes::new(options.figure_size));
        self.plot_on(&mut axes, options)?;
        Ok(axes)
    }

    /// Appends the waterfall to an existing surface without clearing it.
    ///
    /// Every input is validated before the surface is touched, so an error
    /// leaves `axes` exactly as it was.
    pub fn plot_on<'a>(
        &self,
        axes: &'a mut Axes,
        options: &PlotOptions,
    ) -> ChartResult<&'a mut Axes> {
        options.validate()?;
        let bars = self.labeled_bars(&options.bar_labels, options.label_precision)?;

        let bar_style = &options.bar_style;
        let bar_artists: Vec<BarArtist> = bars
            .iter()
            .map(|bar| BarArtist {
                x: bar.index as f64,
                bottom: bar.bottom,
                top: bar.top,
                width: bar_style.width,
                fill_color: apply_alpha(
                    options.colors.resolve_bar_color(bar.kind, bar_style),
                    bar_style.alpha,
                ),
                edge_color: bar_style.edge_color,
                edge_width: bar_style.edge_width,
                corner_radius_px: bar_style.corner_radius_px,
            })
            .collect();

        let line_style = &options.line_style;
        let connectors: Vec<LineArtist> = bars
            .windows(2)
            .map(|pair| LineArtist {
                x1: pair[0].index as f64,
                y1: pair[0].cumulative,
                x2: pair[1].index as f64,
                y2: pair[0].cumulative,
                color: line_style.effective_color(),
                width_px: line_style.width,
                stroke: line_style.stroke,
            })
            .collect();

        let labels: Vec<TextArtist> = bars
            .iter()
            .filter_map(|bar| {
                bar.label.as_ref().map(|label| TextArtist {
                    x: bar.index as f64,
                    y: bar.cumulative * LABEL_OFFSET_FACTOR,
                    text: label.clone(),
                    color: options.colors.resolve_text_color(bar.kind),
                    font_size_px: options.label_font_size_px,
                    h_align: TextHAlign::Center,
                    v_align: TextVAlign::Baseline,
                })
            })
            .collect();

        let x_ticks: Vec<(f64, String)> = bars
            .iter()
            .map(|bar| (bar.index as f64, bar.name.clone()))
            .collect();
        let (y_low, y_high) = value_limits(&bars);
        let layout = AxesLayout {
            title: options.title.clone(),
            y_label: self.metric_name.clone(),
            x_ticks,
            x_limits: validate_limits(-0.5, bars.len() as f64 - 0.5, "x")?,
            y_limits: validate_limits(y_low, y_high, "y")?,
        };
        bar_artists.iter().try_for_each(BarArtist::validate)?;
        connectors.iter().try_for_each(LineArtist::validate)?;
        labels.iter().try_for_each(TextArtist::validate)?;

        debug!(
            bars = bar_artists.len(),
            connectors = connectors.len(),
            labels = labels.len(),
            increases = bars.iter().filter(|bar| bar.kind == BarKind::Increase).count(),
            decreases = bars.iter().filter(|bar| bar.kind == BarKind::Decrease).count(),
            "plot waterfall"
        );
        axes.apply_layout(layout);
        axes.extend_artists(bar_artists, connectors, labels);
        Ok(axes)
    }
}

/// `(min(0, lowest extent), highest extent * 1.1)`, widened when degenerate.
fn value_limits(bars: &[WaterfallBar]) -> (f64, f64) {
    let low = bars.iter().map(|bar| bar.bottom).fold(0.0, f64::min);
    let high = bars.iter().map(|bar| bar.top).fold(f64::NEG_INFINITY, f64::max);
    let high = if high > 0.0 { high * Y_HEADROOM_FACTOR } else { high };
    if high - low <= f64::EPSILON {
        (low, low + 1.0)
    } else {
        (low, high)
    }
}
