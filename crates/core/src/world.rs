//! World module - the complete simulation state
//!
//! Owns the map, player, projectile pool and enemy roster, and applies one tick of
//! input + physics at a time. Rendering reads it by reference.

use crate::enemy::{alive_count, spawn_enemies, EnemyList};
use crate::map::WorldMap;
use crate::physics::{advance_player, advance_projectiles, rotate_player, WorldEvent, WorldEvents};
use crate::player::Player;
use crate::projectile::{FireOutcome, ProjectilePool};
use crate::types::{HeldKey, InputFrame, MoveDirection, TurnDirection};

/// Running counters shown on the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldStats {
    pub shots_fired: u32,
    pub kills: u32,
    pub ticks: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub map: WorldMap,
    pub player: Player,
    pub projectiles: ProjectilePool,
    pub enemies: EnemyList,
    pub stats: WorldStats,
}

impl World {
    /// The arena, default spawn and the fixed enemy roster.
    pub fn new() -> Self {
        Self::with_map(WorldMap::arena())
    }

    pub fn with_map(map: WorldMap) -> Self {
        Self {
            map,
            player: Player::default(),
            projectiles: ProjectilePool::new(),
            enemies: spawn_enemies(),
            stats: WorldStats::default(),
        }
    }

    pub fn advance_player(&mut self, direction: MoveDirection, dt: f32) -> bool {
        advance_player(&mut self.player, &self.map, direction, dt)
    }

    pub fn rotate_player(&mut self, direction: TurnDirection, dt: f32) {
        rotate_player(&mut self.player, direction, dt);
    }

    /// Fire from the player's current pose.
    pub fn fire_projectile(&mut self) -> FireOutcome {
        let outcome = self
            .projectiles
            .fire(self.player.x, self.player.y, self.player.heading);
        if outcome.fired() {
            self.stats.shots_fired = self.stats.shots_fired.saturating_add(1);
        }
        outcome
    }

    pub fn advance_projectiles(&mut self, dt: f32, events: &mut WorldEvents) {
        advance_projectiles(
            &mut self.projectiles,
            &mut self.enemies,
            &self.map,
            dt,
            events,
        );
    }

    /// Apply one tick: movement, rotation, fire, then projectiles.
    pub fn step(&mut self, input: &InputFrame, dt: f32) -> WorldEvents {
        let mut events = WorldEvents::new();

        for key in HeldKey::ALL {
            if !input.is_held(key) {
                continue;
            }
            if let Some(direction) = key.move_direction() {
                self.advance_player(direction, dt);
            }
        }
        for key in HeldKey::ALL {
            if !input.is_held(key) {
                continue;
            }
            if let Some(direction) = key.turn_direction() {
                self.rotate_player(direction, dt);
            }
        }

        if input.fire {
            let event = match self.fire_projectile() {
                FireOutcome::Fired { slot } => WorldEvent::Fired { slot },
                FireOutcome::PoolFull => WorldEvent::FireDropped,
            };
            let _ = events.try_push(event);
        }

        self.advance_projectiles(dt, &mut events);

        let kills = events
            .iter()
            .filter(|e| matches!(e, WorldEvent::EnemyKilled { .. }))
            .count() as u32;
        self.stats.kills = self.stats.kills.saturating_add(kills);
        self.stats.ticks = self.stats.ticks.saturating_add(1);

        events
    }

    pub fn alive_enemies(&self) -> usize {
        alive_count(&self.enemies)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
