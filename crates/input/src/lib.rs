//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into held and pressed game keys and folds them into
//! one [`crate::types::InputFrame`] per tick, including on terminals without
//! key-release events.

pub mod handler;
pub mod map;
pub mod source;
pub mod terminal;

pub use tui_raycaster_types as types;

pub use handler::KeyTracker;
pub use map::{map_key, should_quit, KeyBinding};
pub use source::{InputSource, ScriptedInput};
pub use terminal::TerminalInput;
