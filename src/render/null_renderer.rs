use crate::error::ChartResult;
use crate::render::{FrameStats, RenderFrame, Renderer};

/// Headless renderer for tests and layout-only hosts.
///
/// Frames are still validated, so invalid geometry surfaces as an error.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_stats: FrameStats,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_stats = frame.stats();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
