use serde::{Deserialize, Serialize};

use crate::core::FigureSize;
use crate::error::{ChartError, ChartResult};

use super::{BarStyle, ColorConfig, LineStyle};

pub const DEFAULT_TITLE_FONT_SIZE_PX: f64 = 16.0;
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 11.0;

/// What to print above each bar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "text")]
pub enum BarLabels {
    /// The bar's delta, or its value for the start and end bars.
    #[default]
    Values,
    Hidden,
    /// Same text above every bar.
    Fixed(String),
    /// One text per bar, including the end bar.
    Custom(Vec<String>),
}

impl From<bool> for BarLabels {
    fn from(show: bool) -> Self {
        if show { Self::Values } else { Self::Hidden }
    }
}

impl From<&str> for BarLabels {
    fn from(text: &str) -> Self {
        Self::Fixed(text.to_owned())
    }
}

impl From<Vec<String>> for BarLabels {
    fn from(labels: Vec<String>) -> Self {
        Self::Custom(labels)
    }
}

/// Per-call drawing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotOptions {
    pub title: String,
    pub figure_size: FigureSize,
    pub bar_labels: BarLabels,
    pub label_precision: u8,
    pub label_font_size_px: f64,
    pub colors: ColorConfig,
    pub bar_style: BarStyle,
    pub line_style: LineStyle,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            figure_size: FigureSize::default(),
            bar_labels: BarLabels::default(),
            label_precision: 0,
            label_font_size_px: DEFAULT_LABEL_FONT_SIZE_PX,
            colors: ColorConfig::default(),
            bar_style: BarStyle::default(),
            line_style: LineStyle::default(),
        }
    }
}

impl PlotOptions {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_figure_size(mut self, figure_size: FigureSize) -> Self {
        self.figure_size = figure_size;
        self
    }

    #[must_use]
    pub fn with_bar_labels(mut self, bar_labels: impl Into<BarLabels>) -> Self {
        self.bar_labels = bar_labels.into();
        self
    }

    #[must_use]
    pub fn with_label_precision(mut self, precision: u8) -> Self {
        self.label_precision = precision;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorConfig) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_bar_style(mut self, bar_style: BarStyle) -> Self {
        self.bar_style = bar_style;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Checks every option that does not depend on the series length.
    pub fn validate(&self) -> ChartResult<()> {
        self.figure_size.validate()?;
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidInput(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        self.colors.validate()?;
        self.bar_style.validate()?;
        self.line_style.validate()
    }
}
