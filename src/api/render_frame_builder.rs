use tracing::{debug, warn};

use crate::core::{FigureSize, LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextVAlign,
};

use super::Axes;
use super::axis_ticks::{
    AXIS_VALUE_MAX_TICKS, AXIS_VALUE_MIN_TICKS, AXIS_VALUE_TARGET_SPACING_PX,
    axis_tick_target_count, step_precision, value_ticks,
};
use super::label_format::format_value_label;

const PLOT_MARGIN_LEFT_PX: f64 = 72.0;
const PLOT_MARGIN_RIGHT_PX: f64 = 24.0;
const PLOT_MARGIN_TOP_PX: f64 = 16.0;
const PLOT_MARGIN_BOTTOM_PX: f64 = 44.0;
const TITLE_GAP_PX: f64 = 12.0;
const TICK_LENGTH_PX: f64 = 4.0;
const TICK_LABEL_FONT_SIZE_PX: f64 = 11.0;
const AXIS_LABEL_FONT_SIZE_PX: f64 = 12.0;
const AXIS_LINE_WIDTH_PX: f64 = 1.0;

fn axis_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn grid_color() -> Color {
    Color::rgba(0.0, 0.0, 0.0, 0.12)
}

/// Pixel box of the plotting area inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Axes {
    /// Viewport matching the figure size at the default resolution.
    pub fn default_viewport(&self) -> ChartResult<Viewport> {
        self.figure_size().to_viewport(FigureSize::DEFAULT_DPI)
    }

    pub fn plot_area(&self, viewport: Viewport) -> ChartResult<PlotArea> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let title_space = if self.title().is_empty() {
            0.0
        } else {
            self.title_font_size_px() + TITLE_GAP_PX
        };
        let area = PlotArea {
            left: PLOT_MARGIN_LEFT_PX,
            top: PLOT_MARGIN_TOP_PX + title_space,
            right: f64::from(viewport.width) - PLOT_MARGIN_RIGHT_PX,
            bottom: f64::from(viewport.height) - PLOT_MARGIN_BOTTOM_PX,
        };
        if area.right <= area.left || area.bottom <= area.top {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(area)
    }

    /// Projects every artist and decoration into pixel-space primitives.
    pub fn build_render_frame(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        let area = self.plot_area(viewport)?;
        let (x_start, x_end) = self.x_limits();
        let (y_start, y_end) = self.y_limits();
        let x_scale = LinearScale::new(x_start, x_end, area.left, area.right)?;
        let y_scale = LinearScale::new(y_start, y_end, area.bottom, area.top)?;

        let mut frame = RenderFrame::new(viewport);

        for bar in self.bars() {
            let half = bar.width * 0.5;
            let left = x_scale.domain_to_pixel(bar.x - half)?.max(area.left);
            let right = x_scale.domain_to_pixel(bar.x + half)?.min(area.right);
            let top = y_scale.domain_to_pixel(bar.top)?.max(area.top);
            let bottom = y_scale.domain_to_pixel(bar.bottom)?.min(area.bottom);
            if right <= left || bottom < top {
                continue;
            }
            let mut rect = RectPrimitive::new(left, top, right - left, bottom - top, bar.fill_color)
                .with_corner_radius(bar.corner_radius_px);
            if bar.edge_width > 0.0 {
                rect = rect.with_border(bar.edge_width, bar.edge_color.unwrap_or_else(axis_color));
            }
            frame.push_rect(rect);
        }

        let tick_count = axis_tick_target_count(
            area.bottom - area.top,
            AXIS_VALUE_TARGET_SPACING_PX,
            AXIS_VALUE_MIN_TICKS,
            AXIS_VALUE_MAX_TICKS,
        );
        let (y_ticks, y_step) = value_ticks(y_start, y_end, tick_count);
        if y_ticks.is_empty() {
            warn!(y_start, y_end, "no value ticks for y limits");
        }
        let y_tick_precision = step_precision(y_step);
        let y_tick_pixels = y_ticks
            .iter()
            .map(|value| y_scale.domain_to_pixel(*value))
            .collect::<ChartResult<Vec<_>>>()?;

        if self.grid() {
            for y in &y_tick_pixels {
                frame.push_line(LinePrimitive::new(
                    area.left,
                    *y,
                    area.right,
                    *y,
                    AXIS_LINE_WIDTH_PX,
                    grid_color(),
                ));
            }
        }

        for line in self.lines() {
            frame.push_line(
                LinePrimitive::new(
                    x_scale.domain_to_pixel(line.x1)?,
                    y_scale.domain_to_pixel(line.y1)?,
                    x_scale.domain_to_pixel(line.x2)?,
                    y_scale.domain_to_pixel(line.y2)?,
                    line.width_px,
                    line.color,
                )
                .with_stroke_style(line.stroke),
            );
        }

        // Left and bottom spines.
        frame.push_line(LinePrimitive::new(
            area.left,
            area.top,
            area.left,
            area.bottom,
            AXIS_LINE_WIDTH_PX,
            axis_color(),
        ));
        frame.push_line(LinePrimitive::new(
            area.left,
            area.bottom,
            area.right,
            area.bottom,
            AXIS_LINE_WIDTH_PX,
            axis_color(),
        ));

        for (value, y) in y_ticks.iter().zip(&y_tick_pixels) {
            frame.push_line(LinePrimitive::new(
                area.left - TICK_LENGTH_PX,
                *y,
                area.left,
                *y,
                AXIS_LINE_WIDTH_PX,
                axis_color(),
            ));
            frame.push_text(
                TextPrimitive::new(
                    format_value_label(*value, y_tick_precision),
                    area.left - TICK_LENGTH_PX - 2.0,
                    *y,
                    TICK_LABEL_FONT_SIZE_PX,
                    axis_color(),
                    TextHAlign::Right,
                )
                .with_v_align(TextVAlign::Center),
            );
        }

        for (position, label) in self.x_ticks() {
            if !(x_start..=x_end).contains(position) {
                continue;
            }
            let x = x_scale.domain_to_pixel(*position)?;
            frame.push_line(LinePrimitive::new(
                x,
                area.bottom,
                x,
                area.bottom + TICK_LENGTH_PX,
                AXIS_LINE_WIDTH_PX,
                axis_color(),
            ));
            if !label.is_empty() {
                frame.push_text(
                    TextPrimitive::new(
                        label.clone(),
                        x,
                        area.bottom + TICK_LENGTH_PX + 2.0,
                        TICK_LABEL_FONT_SIZE_PX,
                        axis_color(),
                        TextHAlign::Center,
                    )
                    .with_v_align(TextVAlign::Top),
                );
            }
        }

        for text in self.texts().iter().filter(|text| !text.text.is_empty()) {
            frame.push_text(
                TextPrimitive::new(
                    text.text.clone(),
                    x_scale.domain_to_pixel(text.x)?,
                    y_scale.domain_to_pixel(text.y)?,
                    text.font_size_px,
                    text.color,
                    text.h_align,
                )
                .with_v_align(text.v_align),
            );
        }

        if !self.y_label().is_empty() {
            frame.push_text(
                TextPrimitive::new(
                    self.y_label(),
                    AXIS_LABEL_FONT_SIZE_PX,
                    (area.top + area.bottom) * 0.5,
                    AXIS_LABEL_FONT_SIZE_PX,
                    axis_color(),
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Center)
                .with_rotation(90.0),
            );
        }

        if !self.title().is_empty() {
            frame.push_text(
                TextPrimitive::new(
                    self.title(),
                    (area.left + area.right) * 0.5,
                    area.top - TITLE_GAP_PX * 0.5,
                    self.title_font_size_px(),
                    axis_color(),
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Bottom),
            );
        }

        debug!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "built axes render frame"
        );
        Ok(frame)
    }

    /// Builds the frame for `viewport` and hands it to `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R, viewport: Viewport) -> ChartResult<()> {
        let frame = self.build_render_frame(viewport)?;
        renderer.render(&frame)
    }
}
