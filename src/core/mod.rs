pub mod color;
pub mod palette;
pub mod types;

pub use color::{FILL_ALPHA, Rgb8, Rgba, STROKE_ALPHA};
pub use palette::{DEFAULT_CHART_COLORS, PaletteCycle};
pub use types::{ChartDimensions, DataPoint};
