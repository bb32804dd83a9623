use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of one render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Figure size in inches, converted to pixels with a dots-per-inch factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    pub const DEFAULT_DPI: f64 = 100.0;

    #[must_use]
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [("width", self.width_in), ("height", self.height_in)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidInput(format!(
                    "figure {name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    /// Pixel viewport for this figure at `dpi`.
    pub fn to_viewport(self, dpi: f64) -> ChartResult<Viewport> {
        self.validate()?;
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(ChartError::InvalidInput(
                "dpi must be finite and > 0".to_owned(),
            ));
        }
        let viewport = Viewport::new(
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        );
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(viewport)
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(10.0, 5.0)
    }
}
