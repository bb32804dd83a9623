//! waterfall-chart: waterfall charts from cumulative values.
//!
//! The crate derives increase/decrease bars from a running total, appends
//! them to an [`api::Axes`] drawing surface, and projects that surface into a
//! backend-agnostic [`render::RenderFrame`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Axes, PlotOptions, WaterfallChart};
pub use error::{ChartError, ChartResult};
