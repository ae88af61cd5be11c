//! Enemies: stationary targets that die when shot.

use arrayvec::ArrayVec;

use crate::types::{ENEMY_SPAWNS, MAX_ENEMIES};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, alive: true }
    }
}

/// Enemy list. Dead enemies stay in place so indices are stable.
pub type EnemyList = ArrayVec<Enemy, MAX_ENEMIES>;

/// The fixed starting roster.
pub fn spawn_enemies() -> EnemyList {
    ENEMY_SPAWNS
        .iter()
        .map(|&(x, y)| Enemy::new(x, y))
        .collect()
}

pub fn alive_count(enemies: &[Enemy]) -> usize {
    enemies.iter().filter(|e| e.alive).count()
}
