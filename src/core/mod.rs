pub mod primitives;
pub mod scale;
pub mod series;
pub mod steps;
pub mod types;

pub use scale::LinearScale;
pub use series::StepSeries;
pub use steps::{BarKind, WaterfallBar, derive_bars};
pub use types::{FigureSize, Viewport};
