//! Screen-space projection for walls and sprites.
//!
//! Pure functions: wall distance -> vertical band, world point -> sprite rectangle.

use std::f32::consts::{PI, TAU};

use crate::player::Player;
use crate::types::MIN_SPRITE_DISTANCE;

/// Vertical extent of a wall column.
///
/// Rows `< ceiling` are sky, `ceiling..=floor` are wall, rows `> floor` are ground.
/// Both bounds may fall outside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallBand {
    pub ceiling: i32,
    pub floor: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Sky,
    Wall,
    Ground,
}

impl WallBand {
    pub fn row_kind(&self, y: i32) -> RowKind {
        if y < self.ceiling {
            RowKind::Sky
        } else if y <= self.floor {
            RowKind::Wall
        } else {
            RowKind::Ground
        }
    }
}

pub fn wall_band(distance: f32, view_height: u16) -> WallBand {
    let h = view_height as f32;
    let ceiling = (h / 2.0 - h / distance.max(f32::EPSILON)) as i32;
    WallBand {
        ceiling,
        floor: view_height as i32 - ceiling,
    }
}

/// Distance brackets for wall shading, nearest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WallShade {
    Solid,
    Dark,
    Medium,
    Light,
    /// Too far to draw
    Empty,
}

impl WallShade {
    pub fn from_distance(distance: f32) -> Self {
        if distance <= 1.0 {
            WallShade::Solid
        } else if distance < 2.0 {
            WallShade::Dark
        } else if distance < 4.0 {
            WallShade::Medium
        } else if distance < 8.0 {
            WallShade::Light
        } else {
            WallShade::Empty
        }
    }

    pub fn glyph(self) -> char {
        match self {
            WallShade::Solid => '█',
            WallShade::Dark => '▓',
            WallShade::Medium => '▒',
            WallShade::Light => '░',
            WallShade::Empty => ' ',
        }
    }
}

/// Ground glyph for row `y`. Depends only on the row, not on distance.
pub fn ground_glyph(y: u16, view_height: u16) -> char {
    let half = view_height as f32 / 2.0;
    if half <= 0.0 {
        return ' ';
    }
    let b = 1.0 - ((y as f32 - half) / half);
    if b < 0.25 {
        '#'
    } else if b < 0.5 {
        'x'
    } else if b < 0.75 {
        '.'
    } else if b < 0.9 {
        '-'
    } else {
        ' '
    }
}

/// Wrap an angle difference into `(-π, π]`.
pub fn normalize_relative(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    // Differences of two normalized headings are within one turn.
    if angle.abs() > 2.0 * TAU {
        let a = angle.rem_euclid(TAU);
        return if a > PI { a - TAU } else { a };
    }
    let mut angle = angle;
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Absolute bearing from `(from_x, from_y)` to `(to_x, to_y)`.
///
/// Uses the same convention as headings, so a point straight ahead of a player
/// has a bearing equal to the player's heading.
#[inline]
pub fn bearing(from_x: f32, from_y: f32, to_x: f32, to_y: f32) -> f32 {
    (to_x - from_x).atan2(to_y - from_y)
}

/// Slack on both FOV edges, so a point placed exactly on an edge lands on
/// the same side after the trip through `atan2`.
const EDGE_EPSILON: f32 = 1e-5;

/// Screen column for a bearing relative to the view center.
///
/// The visible range is `[-fov/2, fov/2)`: the left edge maps to column 0,
/// the right edge is excluded, matching the ray fan.
pub fn column_for_bearing(relative: f32, fov: f32, width: u16) -> Option<u16> {
    let half = fov / 2.0;
    if width == 0 || relative < -half - EDGE_EPSILON || relative >= half - EDGE_EPSILON {
        return None;
    }
    let col = ((relative + half) / fov * width as f32).floor() as i32;
    // Float rounding on either edge can land on -1 or `width`.
    Some(col.clamp(0, width as i32 - 1) as u16)
}

/// Where and how large a world point appears on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteProjection {
    pub column: u16,
    pub distance: f32,
    /// Height in rows, inversely proportional to distance
    pub size: i32,
}

impl SpriteProjection {
    /// Top row of a sprite box of height `size`, centered at mid-screen
    pub fn top(&self, view_height: u16) -> i32 {
        view_height as i32 / 2 - self.size / 2
    }
}

/// Project a world point for `player` into a `width x height` view.
pub fn project_point(
    player: &Player,
    x: f32,
    y: f32,
    width: u16,
    height: u16,
) -> Option<SpriteProjection> {
    let distance = player.distance_to(x, y);
    if distance < MIN_SPRITE_DISTANCE {
        return None;
    }

    let relative = normalize_relative(bearing(player.x, player.y, x, y) - player.heading);
    let column = column_for_bearing(relative, player.fov, width)?;
    let size = ((height as f32 / distance) as i32).min(height as i32 * 2);

    Some(SpriteProjection {
        column,
        distance,
        size,
    })
}
