use std::f64::consts::{FRAC_PI_2, PI};
use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextVAlign,
};

/// Counts of primitives painted by the last pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can paint onto a Cairo context owned by the host, such as a
/// GTK drawing-area callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango backend.
///
/// `Renderer::render` paints into an owned ARGB image surface that
/// `write_png` can export. `CairoContextRenderer` paints onto a caller's
/// context instead.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("create surface", err))?;
        Ok(Self {
            surface,
            background: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_background(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the owned surface as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn paint_frame(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        set_source(context, self.background);
        context
            .paint()
            .map_err(|err| backend_error("paint background", err))?;

        for rect in &frame.rects {
            paint_rect(context, rect)?;
        }
        for line in &frame.lines {
            paint_line(context, line)?;
        }
        context.set_dash(&[], 0.0);
        for text in &frame.texts {
            paint_text(context, text)?;
        }

        self.last_stats = CairoRenderStats {
            rects_drawn: frame.rects.len(),
            lines_drawn: frame.lines.len(),
            texts_drawn: frame.texts.len(),
        };
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context =
            Context::new(&self.surface).map_err(|err| backend_error("create context", err))?;
        self.paint_frame(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.paint_frame(context, frame)
    }
}

fn paint_rect(context: &Context, rect: &RectPrimitive) -> ChartResult<()> {
    trace_rect_path(context, rect);
    set_source(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context.fill().map_err(|err| backend_error("fill bar", err));
    }

    context
        .fill_preserve()
        .map_err(|err| backend_error("fill bar", err))?;
    set_source(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context.set_dash(&[], 0.0);
    context
        .stroke()
        .map_err(|err| backend_error("stroke bar edge", err))
}

fn paint_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    context.set_dash(&line.stroke_style.dash_pattern(line.stroke_width), 0.0);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| backend_error("stroke line", err))
}

fn paint_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}px", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let offset_x = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(width) * 0.5,
        TextHAlign::Right => -f64::from(width),
    };
    let offset_y = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Center => -f64::from(height) * 0.5,
        TextVAlign::Baseline => -f64::from(layout.baseline()) / f64::from(pango::SCALE),
        TextVAlign::Bottom => -f64::from(height),
    };

    context
        .save()
        .map_err(|err| backend_error("save state", err))?;
    context.translate(text.x, text.y);
    if text.rotation_deg != 0.0 {
        // Cairo rotates clockwise in screen space.
        context.rotate(-text.rotation_deg.to_radians());
    }
    set_source(context, text.color);
    context.move_to(offset_x, offset_y);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| backend_error("restore state", err))
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn trace_rect_path(context: &Context, rect: &RectPrimitive) {
    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    if radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn backend_error(action: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("cairo failed to {action}: {err}"))
}
