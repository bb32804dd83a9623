mod color;
mod frame;
mod null_renderer;
mod primitives;

pub use color::Color;
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from waterfall derivation and styling.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
