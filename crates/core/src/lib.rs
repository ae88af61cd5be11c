//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the world state, physics, and the raycasting math.
//! It has **zero dependencies** on terminals, clocks, or I/O, making it:
//!
//! - **Deterministic**: the same inputs and `dt` sequence produce the same world
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: any front end can drive it
//! - **Fast**: fixed-capacity containers, no allocation per tick or per shot
//!
//! # Module Structure
//!
//! - [`map`]: 16x16 wall grid with occupancy queries
//! - [`player`]: player pose and heading normalization
//! - [`projectile`]: fixed projectile pool with per-slot trail rings
//! - [`enemy`]: stationary enemy roster
//! - [`physics`]: movement, rotation, projectile integration and hit resolution
//! - [`raycast`]: fixed-step ray marching, one ray per screen column
//! - [`projection`]: wall bands, shading brackets and sprite projection
//! - [`world`]: the session object tying everything together
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::World;
//! use tui_raycaster_types::{HeldKey, InputFrame};
//!
//! let mut world = World::new();
//! let input = InputFrame::default().with_held(HeldKey::Forward).with_fire();
//! let events = world.step(&input, 1.0 / 30.0);
//!
//! assert!(!events.is_empty());
//! assert_eq!(world.projectiles.active_count(), 1);
//! assert!(world.player.y > 8.0);
//! ```

pub mod enemy;
pub mod map;
pub mod physics;
pub mod player;
pub mod projectile;
pub mod projection;
pub mod raycast;
pub mod world;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use enemy::{alive_count, Enemy, EnemyList};
pub use map::{MapError, Tile, WorldMap, ARENA_ROWS};
pub use physics::{WorldEvent, WorldEvents};
pub use player::{normalize_heading, Player};
pub use projectile::{FireOutcome, Projectile, ProjectilePool, Trail};
pub use projection::{project_point, wall_band, RowKind, SpriteProjection, WallBand, WallShade};
pub use raycast::{cast_columns, cast_ray, column_angle, RayHit};
pub use world::{World, WorldStats};
