//! Property-based invariants for movement and rotation.
//!
//! 1. A blocked move leaves the player exactly where it was.
//! 2. An accepted move always lands on an empty cell.
//! 3. Heading stays in `[0, 2π)` after any rotation.
//! 4. Any input sequence from the spawn keeps the player on open floor.

use std::f32::consts::TAU;

use proptest::prelude::*;

use tui_raycaster::core::physics::{advance_player, rotate_player};
use tui_raycaster::core::{Player, World, WorldMap};
use tui_raycaster::types::{HeldKey, InputFrame, MoveDirection, TurnDirection, MAX_FRAME_DT};

fn direction_strategy() -> impl Strategy<Value = MoveDirection> {
    prop::sample::select(MoveDirection::ALL.to_vec())
}

fn input_strategy() -> impl Strategy<Value = InputFrame> {
    (0u8..64, any::<bool>()).prop_map(|(mask, fire)| {
        let mut frame = InputFrame::default();
        for key in HeldKey::ALL {
            if mask & (1 << key.index()) != 0 {
                frame.press(key);
            }
        }
        frame.fire = fire;
        frame
    })
}

proptest! {
    #[test]
    fn move_is_all_or_nothing(
        x in 0.0f32..16.0,
        y in 0.0f32..16.0,
        heading in 0.0f32..TAU,
        direction in direction_strategy(),
        dt in 0.0f32..=MAX_FRAME_DT,
    ) {
        let map = WorldMap::arena();
        let mut player = Player::new(x, y, heading);
        let before = player;

        if advance_player(&mut player, &map, direction, dt) {
            prop_assert!(!map.is_solid_at(player.x, player.y));
            prop_assert_eq!(player.heading, before.heading);
        } else {
            prop_assert_eq!(player, before);
        }
    }
}

proptest! {
    #[test]
    fn heading_stays_normalized(
        heading in -100.0f32..100.0,
        dt in -50.0f32..50.0,
        left in any::<bool>(),
    ) {
        let mut player = Player::new(8.0, 8.0, heading);
        prop_assert!((0.0..TAU).contains(&player.heading));

        let direction = if left { TurnDirection::Left } else { TurnDirection::Right };
        rotate_player(&mut player, direction, dt);
        prop_assert!(
            (0.0..TAU).contains(&player.heading),
            "heading {} out of range",
            player.heading
        );
    }
}

proptest! {
    #[test]
    fn player_never_enters_a_wall(
        inputs in prop::collection::vec(input_strategy(), 1..120),
        dt in 0.001f32..=MAX_FRAME_DT,
    ) {
        let mut world = World::new();
        for input in &inputs {
            world.step(input, dt);
            prop_assert!(!world.map.is_solid_at(world.player.x, world.player.y));
            prop_assert!(world.projectiles.active_count() <= world.projectiles.capacity());
        }
    }
}
