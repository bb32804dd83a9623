use serde::{Deserialize, Serialize};

use crate::core::BarKind;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

pub const DEFAULT_BAR_WIDTH: f64 = 0.6;
pub const DEFAULT_CONNECTOR_WIDTH_PX: f64 = 1.0;

/// Named color roles for bars and their value labels.
///
/// Every role is optional; unset roles fall back to `BarStyle::color` (bars
/// only) and then to the built-in palette.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub bar_positive: Option<Color>,
    pub bar_negative: Option<Color>,
    pub bar_start: Option<Color>,
    pub bar_end: Option<Color>,
    pub text_positive: Option<Color>,
    pub text_negative: Option<Color>,
    pub text_start: Option<Color>,
    pub text_end: Option<Color>,
}

impl ColorConfig {
    #[must_use]
    pub fn default_bar_color(kind: BarKind) -> Color {
        match kind {
            BarKind::Increase => Color::from_rgb_u32(0x2E8B57),
            BarKind::Decrease => Color::from_rgb_u32(0xFA8072),
            BarKind::Start => Color::rgb(0.0, 0.75, 0.75),
            BarKind::End => Color::from_rgb_u32(0x808080),
        }
    }

    #[must_use]
    pub fn default_text_color(kind: BarKind) -> Color {
        match kind {
            BarKind::Increase => Color::from_rgb_u32(0x006400),
            BarKind::Decrease => Color::from_rgb_u32(0x800000),
            BarKind::Start | BarKind::End => Color::rgb(0.0, 0.0, 0.0),
        }
    }

    #[must_use]
    pub fn bar_override(&self, kind: BarKind) -> Option<Color> {
        match kind {
            BarKind::Increase => self.bar_positive,
            BarKind::Decrease => self.bar_negative,
            BarKind::Start => self.bar_start,
            BarKind::End => self.bar_end,
        }
    }

    #[must_use]
    pub fn text_override(&self, kind: BarKind) -> Option<Color> {
        match kind {
            BarKind::Increase => self.text_positive,
            BarKind::Decrease => self.text_negative,
            BarKind::Start => self.text_start,
            BarKind::End => self.text_end,
        }
    }

    /// Bar fill: category override, then the generic bar color, then the palette.
    #[must_use]
    pub fn resolve_bar_color(&self, kind: BarKind, bar_style: &BarStyle) -> Color {
        self.bar_override(kind)
            .or(bar_style.color)
            .unwrap_or_else(|| Self::default_bar_color(kind))
    }

    #[must_use]
    pub fn resolve_text_color(&self, kind: BarKind) -> Color {
        self.text_override(kind)
            .unwrap_or_else(|| Self::default_text_color(kind))
    }

    pub fn validate(&self) -> ChartResult<()> {
        [
            self.bar_positive,
            self.bar_negative,
            self.bar_start,
            self.bar_end,
            self.text_positive,
            self.text_negative,
            self.text_start,
            self.text_end,
        ]
        .into_iter()
        .flatten()
        .try_for_each(Color::validate)
    }
}

/// Attributes forwarded to every waterfall bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarStyle {
    /// Bar width in category units.
    pub width: f64,
    pub color: Option<Color>,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    pub corner_radius_px: f64,
    pub alpha: Option<f64>,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_BAR_WIDTH,
            color: None,
            edge_color: None,
            edge_width: 0.0,
            corner_radius_px: 0.0,
            alpha: None,
        }
    }
}

impl BarStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidInput(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        if !self.edge_width.is_finite() || self.edge_width < 0.0 {
            return Err(ChartError::InvalidInput(
                "bar edge width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius_px.is_finite() || self.corner_radius_px < 0.0 {
            return Err(ChartError::InvalidInput(
                "bar corner radius must be finite and >= 0".to_owned(),
            ));
        }
        validate_alpha(self.alpha, "bar")?;
        [self.color, self.edge_color]
            .into_iter()
            .flatten()
            .try_for_each(Color::validate)
    }
}

/// Attributes forwarded to the connector lines between bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineStyle {
    pub color: Color,
    pub stroke: LineStrokeStyle,
    pub width: f64,
    pub alpha: Option<f64>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb_u32(0x808080),
            stroke: LineStrokeStyle::Dashed,
            width: DEFAULT_CONNECTOR_WIDTH_PX,
            alpha: None,
        }
    }
}

impl LineStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidInput(
                "connector width must be finite and > 0".to_owned(),
            ));
        }
        validate_alpha(self.alpha, "connector")?;
        self.color.validate()
    }

    #[must_use]
    pub fn effective_color(&self) -> Color {
        apply_alpha(self.color, self.alpha)
    }
}

pub(super) fn apply_alpha(color: Color, alpha: Option<f64>) -> Color {
    alpha.map_or(color, |alpha| color.with_alpha(alpha))
}

fn validate_alpha(alpha: Option<f64>, owner: &str) -> ChartResult<()> {
    match alpha {
        Some(alpha) if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) => Err(
            ChartError::InvalidInput(format!("{owner} alpha must be in [0, 1]")),
        ),
        _ => Ok(()),
    }
}
