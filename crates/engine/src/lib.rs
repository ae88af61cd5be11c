//! Game loop and startup configuration.
//!
//! The loop is generic over an [`InputSource`](crate::input::InputSource) and a
//! [`FrameSink`](crate::term::FrameSink), so it runs the same against a real
//! terminal and against scripted input with an in-memory sink.

pub mod config;
pub mod game_loop;

pub use tui_raycaster_core as core;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;

pub use config::{LoopConfig, ENV_FPS, ENV_LOG, ENV_MINIMAP};
pub use game_loop::{GameLoop, LoopState};
