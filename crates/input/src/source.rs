//! Input capability used by the game loop.

use std::collections::VecDeque;

use anyhow::Result;

use crate::types::InputFrame;

/// Something that can be asked for the current input state.
pub trait InputSource {
    /// Never blocks. Edges (fire, mini-map toggle) are reported once.
    fn poll(&mut self) -> Result<InputFrame>;
}

/// Replays a fixed list of frames, then asks to quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
    polled: u64,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            polled: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn polled(&self) -> u64 {
        self.polled
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<InputFrame> {
        self.polled += 1;
        Ok(self
            .frames
            .pop_front()
            .unwrap_or_else(|| InputFrame::default().with_quit()))
    }
}
