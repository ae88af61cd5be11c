//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # World Dimensions
//!
//! - **Map**: 16 x 16 cells, row-major, one world unit per cell
//! - **Player spawn**: (8.0, 8.0) facing heading 0
//!
//! Heading 0 faces +y. The facing vector for a heading `h` is `(sin h, cos h)`,
//! so increasing the heading turns toward +x.
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIELD_OF_VIEW` | π/4 | Angular width of the view fan |
//! | `PLAYER_SPEED` | 5.0 | Cells per second |
//! | `TURN_SPEED` | π | Radians per second |
//! | `PROJECTILE_SPEED` | 10.0 | Cells per second |
//! | `PROJECTILE_CAPACITY` | 10 | Projectile pool slots |
//! | `TRAIL_LEN` | 4 | Trail samples per projectile |
//! | `HIT_RADIUS` | 0.5 | Projectile/enemy kill distance |
//! | `RAY_STEP` | 0.1 | Ray marching step |
//! | `MAX_RENDER_DISTANCE` | 16.0 | Ray cutoff distance |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{HeldKey, InputFrame, MoveDirection};
//!
//! let mut input = InputFrame::default();
//! input.press(HeldKey::Forward);
//! assert!(input.is_held(HeldKey::Forward));
//! assert_eq!(HeldKey::Forward.move_direction(), Some(MoveDirection::Forward));
//! ```

use std::f32::consts::PI;

/// Map width in cells
pub const MAP_WIDTH: u8 = 16;

/// Map height in cells
pub const MAP_HEIGHT: u8 = 16;

/// Maximum render width in terminal columns
pub const MAX_VIEW_WIDTH: u16 = 120;

/// Maximum render height in terminal rows
pub const MAX_VIEW_HEIGHT: u16 = 40;

/// Field of view in radians (45°)
pub const FIELD_OF_VIEW: f32 = PI / 4.0;

/// Player movement speed in cells per second
pub const PLAYER_SPEED: f32 = 5.0;

/// Player turn speed in radians per second
pub const TURN_SPEED: f32 = PI;

/// Default spawn position
pub const PLAYER_START: (f32, f32) = (8.0, 8.0);

/// Default spawn heading
pub const PLAYER_START_HEADING: f32 = 0.0;

/// Projectile speed in cells per second
pub const PROJECTILE_SPEED: f32 = 10.0;

/// Number of projectile slots in the pool
pub const PROJECTILE_CAPACITY: usize = 10;

/// Trail samples kept per projectile
pub const TRAIL_LEN: usize = 4;

/// Spacing between the pre-seeded trail samples of a fresh projectile
pub const TRAIL_SPACING: f32 = 0.15;

/// Projectile/enemy kill distance (strictly less than)
pub const HIT_RADIUS: f32 = 0.5;

/// Enemy spawn positions
pub const ENEMY_SPAWNS: [(f32, f32); 3] = [(10.0, 10.0), (5.0, 5.0), (12.0, 3.0)];

/// Upper bound on the enemy list
pub const MAX_ENEMIES: usize = 8;

/// Ray marching step in world units
pub const RAY_STEP: f32 = 0.1;

/// Rays stop here; a miss is reported at this distance
pub const MAX_RENDER_DISTANCE: f32 = 16.0;

/// Sprites closer than this are not projected
pub const MIN_SPRITE_DISTANCE: f32 = 0.05;

/// Default frame rate target
pub const TARGET_FPS: u32 = 30;

/// Largest `dt` handed to the simulation, in seconds
pub const MAX_FRAME_DT: f32 = 0.25;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_spawns_fit_inside_the_map() {
        for (x, y) in ENEMY_SPAWNS {
            assert!(x >= 0.0 && x < MAP_WIDTH as f32);
            assert!(y >= 0.0 && y < MAP_HEIGHT as f32);
        }
        assert!(ENEMY_SPAWNS.len() <= MAX_ENEMIES);
    }

    #[test]
    fn render_distance_is_a_whole_number_of_steps() {
        let steps = MAX_RENDER_DISTANCE / RAY_STEP;
        assert!((steps - steps.round()).abs() < 1e-3);
    }
}

/// Axis-relative movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
}

impl MoveDirection {
    /// Application order within one tick
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Back,
        MoveDirection::StrafeLeft,
        MoveDirection::StrafeRight,
    ];

    /// Unit displacement for a given heading.
    ///
    /// Forward is `(sin h, cos h)`; strafing uses the perpendicular.
    pub fn unit_vector(&self, heading: f32) -> (f32, f32) {
        let (s, c) = heading.sin_cos();
        match self {
            MoveDirection::Forward => (s, c),
            MoveDirection::Back => (-s, -c),
            MoveDirection::StrafeLeft => (-c, s),
            MoveDirection::StrafeRight => (c, -s),
        }
    }
}

/// Rotation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnDirection {
    /// Decreases the heading
    Left,
    /// Increases the heading
    Right,
}

impl TurnDirection {
    pub fn sign(&self) -> f32 {
        match self {
            TurnDirection::Left => -1.0,
            TurnDirection::Right => 1.0,
        }
    }
}

/// Keys that act while held (level-triggered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeldKey {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
}

impl HeldKey {
    pub const COUNT: usize = 6;

    pub const ALL: [HeldKey; HeldKey::COUNT] = [
        HeldKey::Forward,
        HeldKey::Back,
        HeldKey::StrafeLeft,
        HeldKey::StrafeRight,
        HeldKey::TurnLeft,
        HeldKey::TurnRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            HeldKey::Forward => Some(MoveDirection::Forward),
            HeldKey::Back => Some(MoveDirection::Back),
            HeldKey::StrafeLeft => Some(MoveDirection::StrafeLeft),
            HeldKey::StrafeRight => Some(MoveDirection::StrafeRight),
            HeldKey::TurnLeft | HeldKey::TurnRight => None,
        }
    }

    pub fn turn_direction(self) -> Option<TurnDirection> {
        match self {
            HeldKey::TurnLeft => Some(TurnDirection::Left),
            HeldKey::TurnRight => Some(TurnDirection::Right),
            _ => None,
        }
    }
}

/// Keys that act once per press (edge-triggered)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressKey {
    Fire,
    ToggleMinimap,
    Quit,
}

/// One tick's worth of input, as returned by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    held: [bool; HeldKey::COUNT],
    /// A fire press started since the previous poll
    pub fire: bool,
    /// A mini-map toggle press started since the previous poll
    pub toggle_minimap: bool,
    /// Exit requested
    pub quit: bool,
}

impl InputFrame {
    pub fn press(&mut self, key: HeldKey) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: HeldKey) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: HeldKey) -> bool {
        self.held[key.index()]
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    /// Builder used by scripted inputs and tests.
    pub fn with_held(mut self, key: HeldKey) -> Self {
        self.press(key);
        self
    }

    pub fn with_fire(mut self) -> Self {
        self.fire = true;
        self
    }

    pub fn with_quit(mut self) -> Self {
        self.quit = true;
        self
    }
}
