use tracing::trace;

use crate::core::FigureSize;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle, TextHAlign, TextVAlign};

use super::options::DEFAULT_TITLE_FONT_SIZE_PX;

/// Filled bar in data coordinates, centered on `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarArtist {
    pub x: f64,
    pub bottom: f64,
    pub top: f64,
    pub width: f64,
    pub fill_color: Color,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    pub corner_radius_px: f64,
}

/// Straight segment in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineArtist {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Color,
    pub width_px: f64,
    pub stroke: LineStrokeStyle,
}

/// Text anchored at a data coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct TextArtist {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Color,
    pub font_size_px: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl BarArtist {
    pub fn validate(&self) -> ChartResult<()> {
        let geometry = [
            self.x,
            self.bottom,
            self.top,
            self.width,
            self.edge_width,
            self.corner_radius_px,
        ];
        if geometry.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidInput(
                "bar geometry must be finite".to_owned(),
            ));
        }
        if self.bottom > self.top
            || self.width <= 0.0
            || self.edge_width < 0.0
            || self.corner_radius_px < 0.0
        {
            return Err(ChartError::InvalidInput(
                "bar needs bottom <= top, width > 0 and non-negative edge sizes".to_owned(),
            ));
        }
        Ok(())
    }
}

impl LineArtist {
    pub fn validate(&self) -> ChartResult<()> {
        if [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .any(|value| !value.is_finite())
        {
            return Err(ChartError::InvalidInput(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.width_px.is_finite() || self.width_px <= 0.0 {
            return Err(ChartError::InvalidInput(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl TextArtist {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidInput(
                "text anchor must be finite".to_owned(),
            ));
        }
        validate_font_size(self.font_size_px, "text")
    }
}

/// Title, labels and limits written by one plot call.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct AxesLayout {
    pub title: String,
    pub y_label: String,
    pub x_ticks: Vec<(f64, String)>,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
}

/// Drawing surface that waterfall plots append to.
///
/// Holds artists in data space plus axis decorations. Nothing is rasterized
/// until `render`/`build_render_frame`, so callers can keep layering titles,
/// annotations and extra lines onto a surface returned from a plot call.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    figure_size: FigureSize,
    title: String,
    title_font_size_px: f64,
    y_label: String,
    x_ticks: Vec<(f64, String)>,
    x_limits: Option<(f64, f64)>,
    y_limits: Option<(f64, f64)>,
    grid: bool,
    bars: Vec<BarArtist>,
    lines: Vec<LineArtist>,
    texts: Vec<TextArtist>,
}

impl Default for Axes {
    fn default() -> Self {
        Self::new(FigureSize::default())
    }
}

impl Axes {
    #[must_use]
    pub fn new(figure_size: FigureSize) -> Self {
        Self {
            figure_size,
            title: String::new(),
            title_font_size_px: DEFAULT_TITLE_FONT_SIZE_PX,
            y_label: String::new(),
            x_ticks: Vec::new(),
            x_limits: None,
            y_limits: None,
            grid: false,
            bars: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn figure_size(&self) -> FigureSize {
        self.figure_size
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn title_font_size_px(&self) -> f64 {
        self.title_font_size_px
    }

    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    #[must_use]
    pub fn x_ticks(&self) -> &[(f64, String)] {
        &self.x_ticks
    }

    #[must_use]
    pub fn grid(&self) -> bool {
        self.grid
    }

    #[must_use]
    pub fn bars(&self) -> &[BarArtist] {
        &self.bars
    }

    #[must_use]
    pub fn lines(&self) -> &[LineArtist] {
        &self.lines
    }

    #[must_use]
    pub fn texts(&self) -> &[TextArtist] {
        &self.texts
    }

    pub fn set_title(&mut self, title: impl Into<String>, font_size_px: f64) -> ChartResult<()> {
        validate_font_size(font_size_px, "title")?;
        self.title = title.into();
        self.title_font_size_px = font_size_px;
        Ok(())
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_label = label.into();
    }

    pub fn set_x_ticks(&mut self, ticks: Vec<(f64, String)>) -> ChartResult<()> {
        if ticks.iter().any(|(position, _)| !position.is_finite()) {
            return Err(ChartError::InvalidInput(
                "tick positions must be finite".to_owned(),
            ));
        }
        self.x_ticks = ticks;
        Ok(())
    }

    pub fn set_grid(&mut self, grid: bool) {
        self.grid = grid;
    }

    pub fn set_x_limits(&mut self, start: f64, end: f64) -> ChartResult<()> {
        self.x_limits = Some(validate_limits(start, end, "x")?);
        Ok(())
    }

    pub fn set_y_limits(&mut self, start: f64, end: f64) -> ChartResult<()> {
        self.y_limits = Some(validate_limits(start, end, "y")?);
        Ok(())
    }

    pub fn add_bar(&mut self, bar: BarArtist) -> ChartResult<()> {
        bar.validate()?;
        self.bars.push(bar);
        Ok(())
    }

    pub fn add_line(&mut self, line: LineArtist) -> ChartResult<()> {
        line.validate()?;
        self.lines.push(line);
        Ok(())
    }

    pub fn add_text(&mut self, text: TextArtist) -> ChartResult<()> {
        text.validate()?;
        self.texts.push(text);
        Ok(())
    }

    /// Writes a layout with already validated limits; the title takes the default size.
    pub(super) fn apply_layout(&mut self, layout: AxesLayout) {
        self.title = layout.title;
        self.title_font_size_px = DEFAULT_TITLE_FONT_SIZE_PX;
        self.y_label = layout.y_label;
        self.x_ticks = layout.x_ticks;
        self.x_limits = Some(layout.x_limits);
        self.y_limits = Some(layout.y_limits);
    }

    /// Appends pre-validated artists in one step.
    pub(super) fn extend_artists(
        &mut self,
        bars: Vec<BarArtist>,
        lines: Vec<LineArtist>,
        texts: Vec<TextArtist>,
    ) {
        trace!(
            bars = bars.len(),
            lines = lines.len(),
            texts = texts.len(),
            "append artists"
        );
        self.bars.extend(bars);
        self.lines.extend(lines);
        self.texts.extend(texts);
    }

    /// Explicit x limits, or the artists' extent padded by half a category.
    #[must_use]
    pub fn x_limits(&self) -> (f64, f64) {
        self.x_limits.unwrap_or_else(|| {
            let xs = self
                .bars
                .iter()
                .flat_map(|bar| [bar.x - bar.width * 0.5, bar.x + bar.width * 0.5])
                .chain(self.lines.iter().flat_map(|line| [line.x1, line.x2]))
                .chain(self.texts.iter().map(|text| text.x))
                .chain(self.x_ticks.iter().map(|(position, _)| *position));
            padded_extent(xs, 0.5)
        })
    }

    /// Explicit y limits, or the artists' extent with 10% headroom.
    #[must_use]
    pub fn y_limits(&self) -> (f64, f64) {
        self.y_limits.unwrap_or_else(|| {
            let ys = self
                .bars
                .iter()
                .flat_map(|bar| [bar.bottom, bar.top])
                .chain(self.lines.iter().flat_map(|line| [line.y1, line.y2]))
                .chain(self.texts.iter().map(|text| text.y));
            let (low, high) = padded_extent(ys, 0.0);
            let headroom = (high - low) * 0.1;
            (low, high + headroom)
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }
}

pub(super) fn validate_limits(start: f64, end: f64, axis: &str) -> ChartResult<(f64, f64)> {
    if !(end - start).is_finite() || start >= end {
        return Err(ChartError::InvalidInput(format!(
            "{axis} limits must be finite with start < end and a finite span"
        )));
    }
    Ok((start, end))
}

fn validate_font_size(font_size_px: f64, owner: &str) -> ChartResult<()> {
    if !font_size_px.is_finite() || font_size_px <= 0.0 {
        return Err(ChartError::InvalidInput(format!(
            "{owner} font size must be finite and > 0"
        )));
    }
    Ok(())
}

fn padded_extent(values: impl Iterator<Item = f64>, padding: f64) -> (f64, f64) {
    let (low, high) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), value| {
        (low.min(value), high.max(value))
    });
    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }
    if high - low <= f64::EPSILON {
        return (low - padding - 1.0, high + padding + 1.0);
    }
    (low - padding, high + padding)
}
