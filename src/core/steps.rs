use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::StepSeries;
use crate::error::{ChartError, ChartResult};

/// Role of one bar inside a waterfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    /// First cumulative value, drawn from the baseline.
    Start,
    /// Intermediate step with a non-negative delta.
    Increase,
    /// Intermediate step with a negative delta.
    Decrease,
    /// Repeated final cumulative value, drawn from the baseline.
    End,
}

impl BarKind {
    #[must_use]
    pub fn classify(delta: f64) -> Self {
        if delta >= 0.0 {
            Self::Increase
        } else {
            Self::Decrease
        }
    }

    #[must_use]
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// One derived waterfall bar in data space.
///
/// `bottom <= top` always holds. `cumulative` is the running total once this
/// bar is applied, which is where the connector to the next bar is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallBar {
    pub index: usize,
    pub kind: BarKind,
    pub delta: f64,
    pub bottom: f64,
    pub top: f64,
    pub cumulative: f64,
    pub name: String,
    pub label: Option<String>,
}

impl WaterfallBar {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Derives `n + 1` bars from `n` cumulative values.
///
/// Bar 0 is the start bar spanning `[0, v0]`, bars `1..n` span the pairwise
/// extent of consecutive values, and bar `n` repeats the last value as the end
/// bar spanning `[0, v(n-1)]`. `step_names` must hold one name per value.
pub fn derive_bars(
    series: &StepSeries,
    step_names: &[String],
    last_step_label: &str,
) -> ChartResult<Vec<WaterfallBar>> {
    let values = series.values();
    if step_names.len() != values.len() {
        return Err(ChartError::InvalidInput(format!(
            "expected {} step names, got {}",
            values.len(),
            step_names.len()
        )));
    }

    let mut bars = Vec::with_capacity(values.len() + 1);
    bars.push(boundary_bar(
        0,
        BarKind::Start,
        series.first(),
        &step_names[0],
    ));

    for (offset, pair) in values.windows(2).enumerate() {
        let index = offset + 1;
        let (previous, current) = (pair[0], pair[1]);
        let delta = current - previous;
        bars.push(WaterfallBar {
            index,
            kind: BarKind::classify(delta),
            delta,
            bottom: previous.min(current),
            top: previous.max(current),
            cumulative: current,
            name: step_names[index].clone(),
            label: None,
        });
    }

    bars.push(boundary_bar(
        values.len(),
        BarKind::End,
        series.last(),
        last_step_label,
    ));

    debug!(
        values = values.len(),
        bars = bars.len(),
        "derived waterfall bars"
    );
    Ok(bars)
}

fn boundary_bar(index: usize, kind: BarKind, value: f64, name: &str) -> WaterfallBar {
    WaterfallBar {
        index,
        kind,
        delta: value,
        bottom: value.min(0.0),
        top: value.max(0.0),
        cumulative: value,
        name: name.to_owned(),
        label: None,
    }
}
