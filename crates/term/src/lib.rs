//! Terminal frame compositor and display sinks.
//!
//! Scenes are drawn into a plain framebuffer of styled character cells, then
//! handed to a [`FrameSink`]. The terminal sink diffs against the previous frame
//! so only changed runs reach the tty.
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Rebuild every frame from scratch in a fixed draw order
//! - Never allocate per frame once the buffer has reached its size

pub mod fb;
pub mod renderer;
pub mod scene_view;
pub mod sink;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{HudStats, MiniMap, SceneView, Viewport};
pub use sink::{FrameSink, MemorySink};
