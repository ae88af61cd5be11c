//! Movement, collision and projectile integration.
//!
//! Player collision is a binary accept/reject on the destination cell: no sliding,
//! no sweeping. Projectile checks run in a fixed order (bounds, wall, enemy) and the
//! first match wins.

use arrayvec::ArrayVec;

use crate::enemy::Enemy;
use crate::map::{Tile, WorldMap};
use crate::player::{normalize_heading, Player};
use crate::projectile::ProjectilePool;
use crate::types::{MoveDirection, TurnDirection, HIT_RADIUS, PLAYER_SPEED, PROJECTILE_CAPACITY, TURN_SPEED};

/// Capacity of the per-tick event list: one fire plus one expiry per slot.
pub const MAX_EVENTS_PER_TICK: usize = PROJECTILE_CAPACITY + 2;

/// Something the simulation did during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldEvent {
    Fired { slot: usize },
    FireDropped,
    HitWall { slot: usize, x: f32, y: f32 },
    LeftMap { slot: usize },
    EnemyKilled { slot: usize, enemy: usize },
}

pub type WorldEvents = ArrayVec<WorldEvent, MAX_EVENTS_PER_TICK>;

/// Try to move `player` by `PLAYER_SPEED * dt` in `direction`.
///
/// Returns false (and leaves the player untouched) if the destination is solid.
pub fn advance_player(player: &mut Player, map: &WorldMap, direction: MoveDirection, dt: f32) -> bool {
    let (ux, uy) = direction.unit_vector(player.heading);
    let step = PLAYER_SPEED * dt;
    let nx = player.x + ux * step;
    let ny = player.y + uy * step;

    if map.is_solid_at(nx, ny) {
        return false;
    }
    player.x = nx;
    player.y = ny;
    true
}

pub fn rotate_player(player: &mut Player, direction: TurnDirection, dt: f32) {
    player.heading = normalize_heading(player.heading + direction.sign() * TURN_SPEED * dt);
}

/// Advance every active projectile by `dt` and resolve collisions.
pub fn advance_projectiles(
    pool: &mut ProjectilePool,
    enemies: &mut [Enemy],
    map: &WorldMap,
    dt: f32,
    events: &mut WorldEvents,
) {
    for (slot, p) in pool.slots_mut().iter_mut().enumerate() {
        if !p.active {
            continue;
        }

        p.trail.push((p.x, p.y));
        p.x += p.dx * dt;
        p.y += p.dy * dt;

        let Some(tile) = map.tile_at(p.x, p.y) else {
            p.active = false;
            let _ = events.try_push(WorldEvent::LeftMap { slot });
            continue;
        };

        if tile == Tile::Wall {
            p.active = false;
            let _ = events.try_push(WorldEvent::HitWall { slot, x: p.x, y: p.y });
            continue;
        }

        let (px, py) = (p.x, p.y);
        if let Some((idx, enemy)) = enemies
            .iter_mut()
            .enumerate()
            .find(|(_, e)| e.alive && (e.x - px).hypot(e.y - py) < HIT_RADIUS)
        {
            enemy.alive = false;
            p.active = false;
            let _ = events.try_push(WorldEvent::EnemyKilled { slot, enemy: idx });
        }
    }
}
