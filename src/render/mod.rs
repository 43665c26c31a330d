mod frame;
mod null_renderer;

pub use frame::{ChartFrame, SeriesPolyline};
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Drawing backend fed with one [`ChartFrame`] per pass.
///
/// Frames are already projected into drawing coordinates, so backends never
/// see value ranges or scales.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}
