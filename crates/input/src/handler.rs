//! Held-key tracker for terminal environments.
//!
//! Terminals that report key-release events are tracked exactly. Classic terminals
//! only send repeated `Press` events while a key is down, so a key that has not
//! been seen for a while counts as released. The wait is long between the first
//! press and the first OS auto-repeat, and short once repeats are flowing.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{map_key, KeyBinding};
use crate::types::{HeldKey, InputFrame, PressKey};

// Longer than the usual OS repeat interval once repeats have started.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;
// Longer than the usual OS delay before the first auto-repeat.
const DEFAULT_INITIAL_REPEAT_DELAY_MS: u64 = 700;

/// Last time a key was seen, and whether auto-repeat has started for it.
#[derive(Debug, Clone, Copy)]
struct KeySeen {
    at: Instant,
    repeating: bool,
}

impl KeySeen {
    /// A press of a key that is still live is an auto-repeat.
    fn touch(live: bool, now: Instant) -> KeySeen {
        KeySeen {
            at: now,
            repeating: live,
        }
    }
}

/// Turns a stream of key events into one [`InputFrame`] per tick.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    held: [Option<KeySeen>; HeldKey::COUNT],
    fire_down: Option<KeySeen>,
    toggle_down: Option<KeySeen>,
    fire: bool,
    toggle_minimap: bool,
    quit: bool,
    /// `None` when the terminal reports releases
    release_timeout: Option<Duration>,
    initial_repeat_delay: Duration,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: [None; HeldKey::COUNT],
            fire_down: None,
            toggle_down: None,
            fire: false,
            toggle_minimap: false,
            quit: false,
            release_timeout: Some(Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS)),
            initial_repeat_delay: Duration::from_millis(DEFAULT_INITIAL_REPEAT_DELAY_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.release_timeout = Some(Duration::from_millis(timeout_ms));
        self
    }

    /// How long a key pressed once stays down while waiting for its first repeat.
    pub fn with_initial_repeat_delay_ms(mut self, delay_ms: u64) -> Self {
        self.initial_repeat_delay = Duration::from_millis(delay_ms);
        self
    }

    /// Trust release events and never expire keys by time.
    pub fn with_release_events(mut self) -> Self {
        self.release_timeout = None;
        self
    }

    pub fn release_timeout(&self) -> Option<Duration> {
        self.release_timeout
    }

    pub fn initial_repeat_delay(&self) -> Duration {
        self.initial_repeat_delay
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(binding) = map_key(key) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press => self.press(binding, now),
            KeyEventKind::Repeat => self.refresh(binding, now),
            KeyEventKind::Release => self.release(binding),
        }
    }

    pub fn press(&mut self, binding: KeyBinding, now: Instant) {
        match binding {
            KeyBinding::Held(key) => {
                let prev = self.held[key.index()];
                let live = self.is_live(prev, now);
                self.held[key.index()] = Some(KeySeen::touch(live, now));
            }
            KeyBinding::Press(PressKey::Fire) => {
                // A press while the key is still down is a classic-terminal auto-repeat.
                let live = self.is_live(self.fire_down, now);
                if !live {
                    self.fire = true;
                }
                self.fire_down = Some(KeySeen::touch(live, now));
            }
            KeyBinding::Press(PressKey::ToggleMinimap) => {
                let live = self.is_live(self.toggle_down, now);
                if !live {
                    self.toggle_minimap = true;
                }
                self.toggle_down = Some(KeySeen::touch(live, now));
            }
            KeyBinding::Press(PressKey::Quit) => self.quit = true,
        }
    }

    /// Key is still down. Never starts a new press.
    pub fn refresh(&mut self, binding: KeyBinding, now: Instant) {
        let seen = Some(KeySeen {
            at: now,
            repeating: true,
        });
        match binding {
            KeyBinding::Held(key) => self.held[key.index()] = seen,
            KeyBinding::Press(PressKey::Fire) => self.fire_down = seen,
            KeyBinding::Press(PressKey::ToggleMinimap) => self.toggle_down = seen,
            KeyBinding::Press(PressKey::Quit) => {}
        }
    }

    pub fn release(&mut self, binding: KeyBinding) {
        match binding {
            KeyBinding::Held(key) => self.held[key.index()] = None,
            KeyBinding::Press(PressKey::Fire) => self.fire_down = None,
            KeyBinding::Press(PressKey::ToggleMinimap) => self.toggle_down = None,
            KeyBinding::Press(PressKey::Quit) => {}
        }
    }

    /// Current held keys plus every edge seen since the last snapshot.
    ///
    /// Edges are consumed; quit stays latched.
    pub fn snapshot(&mut self, now: Instant) -> InputFrame {
        let mut frame = InputFrame::default();

        for key in HeldKey::ALL {
            let slot = self.held[key.index()];
            if self.is_live(slot, now) {
                frame.press(key);
            } else {
                self.held[key.index()] = None;
            }
        }
        if !self.is_live(self.fire_down, now) {
            self.fire_down = None;
        }
        if !self.is_live(self.toggle_down, now) {
            self.toggle_down = None;
        }

        frame.fire = std::mem::take(&mut self.fire);
        frame.toggle_minimap = std::mem::take(&mut self.toggle_minimap);
        frame.quit = self.quit;
        frame
    }

    /// Forget held keys and pending edges. Timing mode and a latched quit survive.
    pub fn reset(&mut self) {
        *self = Self {
            quit: self.quit,
            release_timeout: self.release_timeout,
            initial_repeat_delay: self.initial_repeat_delay,
            ..Self::new()
        };
    }

    fn is_live(&self, seen: Option<KeySeen>, now: Instant) -> bool {
        match (seen, self.release_timeout) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(seen), Some(timeout)) => {
                let window = if seen.repeating {
                    timeout
                } else {
                    self.initial_repeat_delay.max(timeout)
                };
                now.saturating_duration_since(seen.at) <= window
            }
        }
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
