use anyhow::Result;

use tui_raycaster::core::WorldEvent;
use tui_raycaster::engine::{GameLoop, LoopConfig, LoopState};
use tui_raycaster::input::{InputSource, ScriptedInput};
use tui_raycaster::term::{FrameBuffer, FrameSink, Viewport};
use tui_raycaster::types::{HeldKey, InputFrame};

const DT: f32 = 1.0 / 30.0;

/// Sink that keeps a text copy of every presented frame.
struct RecordingSink {
    viewport: Viewport,
    frames: Vec<String>,
}

impl RecordingSink {
    fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            frames: Vec::new(),
        }
    }
}

impl FrameSink for RecordingSink {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.frames.push(fb.to_text());
        Ok(())
    }
}

struct FailingSink;

impl FrameSink for FailingSink {
    fn viewport(&self) -> Viewport {
        Viewport::new(80, 24)
    }

    fn present(&mut self, _fb: &mut FrameBuffer) -> Result<()> {
        anyhow::bail!("display went away")
    }
}

fn fast_config() -> LoopConfig {
    LoopConfig {
        target_fps: 240,
        ..LoopConfig::default()
    }
}

#[test]
fn shot_from_default_pose_expires_at_thirty_hz() {
    let mut game = GameLoop::default();
    let vp = Viewport::new(80, 24);

    let events = game.tick(&InputFrame::default().with_fire(), DT, vp);
    assert_eq!(events[0], WorldEvent::Fired { slot: 0 });
    assert_eq!(game.frame().get(40, 12).unwrap().ch, '*');

    let mut ticks = 1;
    while game.world().projectiles.active_count() > 0 {
        assert!(ticks < 100, "projectile never expired");
        game.tick(&InputFrame::default(), DT, vp);
        ticks += 1;
    }
    assert_eq!(game.frame().get(40, 12).unwrap().ch, '+');
}

#[test]
fn run_presents_one_frame_per_poll_until_quit() {
    let mut game = GameLoop::new(fast_config());
    // The first iteration has a near-zero dt, so hold forward on the second.
    let mut input = ScriptedInput::new([
        InputFrame::default(),
        InputFrame::default().with_held(HeldKey::Forward),
        InputFrame::default().with_fire(),
    ]);
    let mut sink = RecordingSink::new(80, 24);

    game.run(&mut input, &mut sink).unwrap();

    // Three scripted frames plus the quit frame the script ends with.
    assert_eq!(input.polled(), 4);
    assert_eq!(sink.frames.len(), 4);
    assert_eq!(game.state(), LoopState::Terminated);
    assert!(game.world().player.y > 8.0);

    let last = sink.frames.last().unwrap();
    assert!(last.lines().next().unwrap().contains("SHOTS 1"));
    assert!(last.lines().all(|l| l.chars().count() == 80));
    assert_eq!(last.lines().count(), 24);
}

#[test]
fn run_stops_with_the_sink_error() {
    let mut game = GameLoop::new(fast_config());
    let mut input = ScriptedInput::new([InputFrame::default(); 5]);

    let err = game.run(&mut input, &mut FailingSink).unwrap_err();
    assert!(err.to_string().contains("display went away"));
    assert_eq!(input.polled(), 1);
}

#[test]
fn run_stops_with_the_input_error() {
    struct BrokenInput;

    impl InputSource for BrokenInput {
        fn poll(&mut self) -> Result<InputFrame> {
            anyhow::bail!("tty closed")
        }
    }

    let mut game = GameLoop::new(fast_config());
    let mut sink = RecordingSink::new(80, 24);
    let err = game.run(&mut BrokenInput, &mut sink).unwrap_err();
    assert!(err.to_string().contains("tty closed"));
    assert!(sink.frames.is_empty());
}

#[test]
fn minimap_toggle_reaches_the_presented_frame() {
    let mut game = GameLoop::new(fast_config());
    let mut toggle = InputFrame::default();
    toggle.toggle_minimap = true;
    let mut input = ScriptedInput::new([InputFrame::default(), toggle]);
    let mut sink = RecordingSink::new(80, 24);

    game.run(&mut input, &mut sink).unwrap();

    assert!(sink.frames[0].contains('┌'));
    assert!(!sink.frames[1].contains('┌'));
    assert!(!game.view().minimap_visible());
}

#[test]
fn config_can_start_with_minimap_hidden() {
    let config = LoopConfig {
        show_minimap: false,
        ..LoopConfig::default()
    };
    let mut game = GameLoop::new(config);
    game.tick(&InputFrame::default(), DT, Viewport::new(80, 24));
    assert!(!game.frame().to_text().contains('┌'));
}
