mod axes;
mod axis_ticks;
mod chart;
mod json_contract;
mod label_format;
mod options;
mod render_frame_builder;
mod style;

pub use axes::{Axes, BarArtist, LineArtist, TextArtist};
pub use chart::{DEFAULT_LAST_STEP_LABEL, DEFAULT_METRIC_NAME, WaterfallChart};
pub use label_format::format_value_label;
pub use options::{
    BarLabels, DEFAULT_LABEL_FONT_SIZE_PX, DEFAULT_TITLE_FONT_SIZE_PX, PlotOptions,
};
pub use render_frame_builder::PlotArea;
pub use style::{BarStyle, ColorConfig, DEFAULT_BAR_WIDTH, DEFAULT_CONNECTOR_WIDTH_PX, LineStyle};
