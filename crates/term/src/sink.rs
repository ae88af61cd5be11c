//! Display capability used by the game loop.

use anyhow::Result;

use crate::fb::FrameBuffer;
use crate::scene_view::Viewport;

/// Somewhere finished frames go.
///
/// `present` is synchronous: the frame is on screen when it returns. It may swap
/// the buffer's contents with its own copy of the previous frame, so callers must
/// redraw the buffer from scratch before presenting it again.
pub trait FrameSink {
    /// Current renderable size in character cells.
    fn viewport(&self) -> Viewport;

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}

/// In-memory sink that keeps the last presented frame.
#[derive(Debug, Clone)]
pub struct MemorySink {
    viewport: Viewport,
    last: Option<FrameBuffer>,
    presented: u64,
}

impl MemorySink {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            last: None,
            presented: 0,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl FrameSink for MemorySink {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        match self.last.as_mut() {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        self.presented += 1;
        Ok(())
    }
}
