//! Fixed-step ray marching.
//!
//! Each ray advances `RAY_STEP` world units at a time along `(sin a, cos a)` until it
//! lands in a wall cell, leaves the map, or reaches `MAX_RENDER_DISTANCE`. Hit distances
//! can overshoot the true wall boundary by up to one step.

use crate::map::{Tile, WorldMap};
use crate::types::{MAX_RENDER_DISTANCE, RAY_STEP};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// In `[RAY_STEP, MAX_RENDER_DISTANCE]`
    pub distance: f32,
    /// `false` when the ray left the map or ran out of range
    pub hit: bool,
}

impl RayHit {
    pub const MISS: RayHit = RayHit {
        distance: MAX_RENDER_DISTANCE,
        hit: false,
    };
}

/// Number of samples needed to reach the max distance
#[inline]
fn max_steps() -> u32 {
    (MAX_RENDER_DISTANCE / RAY_STEP).ceil() as u32
}

/// March one ray from `(origin_x, origin_y)` along `angle`.
pub fn cast_ray(map: &WorldMap, origin_x: f32, origin_y: f32, angle: f32) -> RayHit {
    let (dir_x, dir_y) = angle.sin_cos();

    // Distances come from the step index rather than an accumulator so that
    // the last sample lands on MAX_RENDER_DISTANCE exactly.
    for i in 1..=max_steps() {
        let distance = (i as f32 * RAY_STEP).min(MAX_RENDER_DISTANCE);
        let x = origin_x + dir_x * distance;
        let y = origin_y + dir_y * distance;

        match map.tile_at(x, y) {
            None => return RayHit::MISS,
            Some(Tile::Wall) => return RayHit { distance, hit: true },
            Some(Tile::Empty) => {}
        }
    }

    RayHit::MISS
}

/// Ray angle for screen column `x` of `width`.
///
/// The fan is linear: column 0 looks at `heading - fov/2`, and the (excluded)
/// column `width` would look at `heading + fov/2`.
#[inline]
pub fn column_angle(heading: f32, fov: f32, x: u16, width: u16) -> f32 {
    if width == 0 {
        return heading;
    }
    heading - fov / 2.0 + (x as f32 / width as f32) * fov
}

/// Cast one ray per column into `out`, one entry per column.
pub fn cast_columns(
    map: &WorldMap,
    origin_x: f32,
    origin_y: f32,
    heading: f32,
    fov: f32,
    out: &mut [RayHit],
) {
    let width = out.len().min(u16::MAX as usize) as u16;
    for (x, slot) in out.iter_mut().enumerate().take(width as usize) {
        let angle = column_angle(heading, fov, x as u16, width);
        *slot = cast_ray(map, origin_x, origin_y, angle);
    }
}
