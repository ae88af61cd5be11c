//! Startup configuration read from the environment.

use std::time::Duration;

use crate::types::TARGET_FPS;

pub const ENV_FPS: &str = "RAYCASTER_FPS";
pub const ENV_MINIMAP: &str = "RAYCASTER_MINIMAP";
pub const ENV_LOG: &str = "RAYCASTER_LOG";

const MIN_FPS: u32 = 1;
const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub target_fps: u32,
    pub show_minimap: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            show_minimap: true,
        }
    }
}

impl LoopConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_FPS) {
            match raw.trim().parse::<u32>() {
                Ok(fps) => config.target_fps = fps.clamp(MIN_FPS, MAX_FPS),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {ENV_FPS}"),
            }
        }
        if let Some(raw) = lookup(ENV_MINIMAP) {
            config.show_minimap = raw.trim() != "0";
        }

        config
    }

    /// Wall-clock time one iteration is allowed to take.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(MIN_FPS)
    }
}
