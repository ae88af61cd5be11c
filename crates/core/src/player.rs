//! Player pose.

use std::f32::consts::TAU;

use crate::types::{FIELD_OF_VIEW, PLAYER_START, PLAYER_START_HEADING};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Radians in `[0, 2π)`. Heading 0 faces +y.
    pub heading: f32,
    pub fov: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self {
            x,
            y,
            heading: normalize_heading(heading),
            fov: FIELD_OF_VIEW,
        }
    }

    /// Unit facing vector `(sin h, cos h)`
    pub fn facing(&self) -> (f32, f32) {
        self.heading.sin_cos()
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        (x - self.x).hypot(y - self.y)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START.0, PLAYER_START.1, PLAYER_START_HEADING)
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_heading(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}
