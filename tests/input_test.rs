use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tui_raycaster::core::World;
use tui_raycaster::input::{map_key, KeyBinding, KeyTracker};
use tui_raycaster::types::{HeldKey, PressKey};

fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn every_held_key_has_a_binding() {
    let bound: Vec<HeldKey> = [
        KeyCode::Char('w'),
        KeyCode::Char('s'),
        KeyCode::Char('a'),
        KeyCode::Char('d'),
        KeyCode::Left,
        KeyCode::Right,
    ]
    .into_iter()
    .filter_map(|code| match map_key(KeyEvent::from(code)) {
        Some(KeyBinding::Held(k)) => Some(k),
        _ => None,
    })
    .collect();
    assert_eq!(bound, HeldKey::ALL.to_vec());
}

#[test]
fn ctrl_c_quits() {
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(key), Some(KeyBinding::Press(PressKey::Quit)));
}

#[test]
fn tapping_forward_moves_the_player_for_a_few_ticks_only() {
    let mut tracker = KeyTracker::new()
        .with_key_release_timeout_ms(50)
        .with_initial_repeat_delay_ms(100);
    let mut world = World::new();
    let t0 = Instant::now();
    let dt = 1.0 / 30.0;

    tracker.handle_key(event(KeyCode::Char('w'), KeyEventKind::Press), t0);

    let mut moving_ticks = 0;
    for i in 0..10u64 {
        let now = t0 + Duration::from_millis(i * 33);
        let before = world.player.y;
        world.step(&tracker.snapshot(now), dt);
        if world.player.y > before {
            moving_ticks += 1;
        }
    }
    // 0, 33, 66 and 99 ms are inside the first-repeat window.
    assert_eq!(moving_ticks, 4);
}

#[test]
fn held_fire_under_auto_repeat_shoots_once() {
    let mut tracker = KeyTracker::new().with_key_release_timeout_ms(100);
    let mut world = World::new();
    let t0 = Instant::now();

    for i in 0..30u64 {
        let now = t0 + Duration::from_millis(i * 33);
        tracker.handle_key(event(KeyCode::Char(' '), KeyEventKind::Press), now);
        world.step(&tracker.snapshot(now), 1.0 / 30.0);
    }
    assert_eq!(world.stats.shots_fired, 1);
}

#[test]
fn held_fire_with_a_realistic_repeat_delay_shoots_once() {
    let mut tracker = KeyTracker::new();
    let t0 = Instant::now();
    let mut shots = 0;

    tracker.handle_key(event(KeyCode::Char(' '), KeyEventKind::Press), t0);
    let mut next_repeat = 500;
    for ms in 0..=1_000u64 {
        if ms == next_repeat {
            tracker.handle_key(
                event(KeyCode::Char(' '), KeyEventKind::Press),
                t0 + Duration::from_millis(ms),
            );
            next_repeat += 33;
        }
        if tracker.snapshot(t0 + Duration::from_millis(ms)).fire {
            shots += 1;
        }
    }
    assert_eq!(shots, 1);
}

#[test]
fn held_forward_survives_the_gap_before_the_first_repeat() {
    let mut tracker = KeyTracker::new();
    let t0 = Instant::now();

    tracker.handle_key(event(KeyCode::Char('w'), KeyEventKind::Press), t0);
    let mut next_repeat = 500;
    for ms in 0..=1_000u64 {
        if ms == next_repeat {
            tracker.handle_key(
                event(KeyCode::Char('w'), KeyEventKind::Press),
                t0 + Duration::from_millis(ms),
            );
            next_repeat += 33;
        }
        let frame = tracker.snapshot(t0 + Duration::from_millis(ms));
        assert!(frame.is_held(HeldKey::Forward), "dropped at {ms} ms");
    }

    // Once repeats stop, the short timeout applies.
    let last = t0 + Duration::from_millis(995);
    assert!(!tracker
        .snapshot(last + tracker.release_timeout().unwrap() + Duration::from_millis(1))
        .is_held(HeldKey::Forward));
}
