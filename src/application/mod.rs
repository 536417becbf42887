mod driver;
mod render_style;

pub use driver::{Driver, INTERVAL_STEP_MS};
pub use render_style::{CELL_SIZES, CellColor, CellShape, ClearMode, RenderStyle};
