//! Non-blocking crossterm input source.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute, terminal,
};

use crate::handler::KeyTracker;
use crate::source::InputSource;
use crate::types::InputFrame;

/// Reads key events from the controlling terminal.
///
/// Expects raw mode to be enabled already. When the terminal supports the kitty
/// keyboard protocol, release events are requested so held keys are exact.
pub struct TerminalInput {
    tracker: KeyTracker,
    enhanced: bool,
}

impl TerminalInput {
    pub fn new() -> Result<Self> {
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        let tracker = if enhanced {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("failed to request key release events")?;
            KeyTracker::new().with_release_events()
        } else {
            tracing::warn!("terminal does not report key releases; held keys expire by timeout");
            KeyTracker::new()
        };

        Ok(Self { tracker, enhanced })
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<InputFrame> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => self.tracker.handle_key(key, Instant::now()),
                Event::FocusLost => self.tracker.reset(),
                _ => {}
            }
        }
        Ok(self.tracker.snapshot(Instant::now()))
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
    }
}
