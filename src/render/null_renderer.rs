use crate::error::ChartResult;
use crate::render::{ChartFrame, Renderer};

/// Headless renderer that draws nothing.
///
/// Frames are validated and counted, which lets tests observe what a real
/// backend would have received.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_polyline_count: usize,
    pub last_tick_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_polyline_count = frame.series.len();
        self.last_tick_count = frame.tick_count();
        Ok(())
    }
}
