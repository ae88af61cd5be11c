//! Fixed-timestep game loop.
//!
//! One iteration polls input, steps the world once, renders once and presents
//! once, then sleeps whatever is left of the frame budget.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::config::LoopConfig;
use crate::core::{World, WorldEvent, WorldEvents};
use crate::input::InputSource;
use crate::term::{FrameBuffer, FrameSink, HudStats, SceneView, Viewport};
use crate::types::{InputFrame, MAX_FRAME_DT};

/// Weight of the newest sample in the smoothed frame rate.
const FPS_SMOOTHING: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Owns the world, the compositor and the reusable framebuffer.
pub struct GameLoop {
    world: World,
    view: SceneView,
    fb: FrameBuffer,
    config: LoopConfig,
    state: LoopState,
    fps: f32,
}

impl GameLoop {
    pub fn new(config: LoopConfig) -> Self {
        Self::with_world(World::new(), config)
    }

    pub fn with_world(world: World, config: LoopConfig) -> Self {
        Self {
            world,
            view: SceneView::default().with_minimap_visible(config.show_minimap),
            fb: FrameBuffer::new(0, 0),
            config,
            state: LoopState::Running,
            fps: config.target_fps as f32,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn view(&self) -> &SceneView {
        &self.view
    }

    pub fn config(&self) -> LoopConfig {
        self.config
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Framebuffer as last rendered by [`tick`](Self::tick).
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn hud(&self) -> HudStats {
        HudStats {
            fps: self.fps.round() as u32,
        }
    }

    /// One simulation step plus one render. `dt` is capped at `MAX_FRAME_DT`.
    ///
    /// Never fails and never allocates once the framebuffer has its size.
    pub fn tick(&mut self, input: &InputFrame, dt: f32, viewport: Viewport) -> WorldEvents {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        if dt > 0.0 {
            self.fps += FPS_SMOOTHING * (1.0 / dt - self.fps);
        }

        if input.toggle_minimap {
            self.view.toggle_minimap();
            tracing::debug!(visible = self.view.minimap_visible(), "mini-map toggled");
        }

        let events = self.world.step(input, dt);
        for event in &events {
            log_event(event);
        }

        let hud = self.hud();
        self.view.render_into(&self.world, &hud, viewport, &mut self.fb);
        events
    }

    /// Poll, tick and present once.
    pub fn run_frame<I, S>(&mut self, input: &mut I, sink: &mut S, dt: f32) -> Result<()>
    where
        I: InputSource + ?Sized,
        S: FrameSink + ?Sized,
    {
        let frame = input.poll()?;
        if frame.quit && self.state == LoopState::Running {
            tracing::info!("quit requested");
            self.state = LoopState::Terminated;
        }

        let viewport = sink.viewport();
        self.tick(&frame, dt, viewport);
        sink.present(&mut self.fb)
    }

    /// Run until quit is requested or an I/O error occurs.
    pub fn run<I, S>(&mut self, input: &mut I, sink: &mut S) -> Result<()>
    where
        I: InputSource + ?Sized,
        S: FrameSink + ?Sized,
    {
        let budget = self.config.frame_budget();
        tracing::info!(
            target_fps = self.config.target_fps,
            minimap = self.view.minimap_visible(),
            "game loop started"
        );

        let mut last = Instant::now();
        while self.state == LoopState::Running {
            let frame_start = Instant::now();
            let dt = frame_start.duration_since(last).as_secs_f32();
            last = frame_start;

            self.run_frame(input, sink, dt)?;

            let elapsed = frame_start.elapsed();
            if let Some(rest) = budget.checked_sub(elapsed) {
                if rest > Duration::ZERO {
                    std::thread::sleep(rest);
                }
            }
        }

        let stats = self.world.stats;
        tracing::info!(
            ticks = stats.ticks,
            shots = stats.shots_fired,
            kills = stats.kills,
            "game loop stopped"
        );
        Ok(())
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(LoopConfig::default())
    }
}

fn log_event(event: &WorldEvent) {
    match *event {
        WorldEvent::Fired { slot } => tracing::debug!(slot, "projectile fired"),
        WorldEvent::FireDropped => tracing::warn!("shot dropped: projectile pool full"),
        WorldEvent::HitWall { slot, x, y } => tracing::debug!(slot, x, y, "projectile hit wall"),
        WorldEvent::LeftMap { slot } => tracing::debug!(slot, "projectile left the map"),
        WorldEvent::EnemyKilled { slot, enemy } => {
            tracing::debug!(slot, enemy, "enemy killed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::term::MemorySink;
    use crate::types::HeldKey;

    const DT: f32 = 1.0 / 30.0;

    #[test]
    fn tick_caps_dt() {
        let mut game = GameLoop::default();
        let input = InputFrame::default().with_held(HeldKey::Forward);
        game.tick(&input, 10.0, Viewport::new(80, 24));
        // 5 cells/s for at most 0.25 s.
        assert!((game.world().player.y - 9.25).abs() < 1e-4);
    }

    #[test]
    fn toggle_flips_minimap_once() {
        let mut game = GameLoop::default();
        assert!(game.view().minimap_visible());
        let mut toggle = InputFrame::default();
        toggle.toggle_minimap = true;
        game.tick(&toggle, DT, Viewport::new(80, 24));
        assert!(!game.view().minimap_visible());
        game.tick(&InputFrame::default(), DT, Viewport::new(80, 24));
        assert!(!game.view().minimap_visible());
    }

    #[test]
    fn quit_finishes_the_current_iteration() {
        let mut game = GameLoop::default();
        let mut input = ScriptedInput::new([
            InputFrame::default(),
            InputFrame::default().with_fire().with_quit(),
            InputFrame::default().with_fire(),
        ]);
        let mut sink = MemorySink::new(Viewport::new(80, 24));

        game.run(&mut input, &mut sink).unwrap();

        assert_eq!(game.state(), LoopState::Terminated);
        assert_eq!(input.polled(), 2);
        assert_eq!(sink.presented(), 2);
        // The fire in the quitting frame still happened.
        assert_eq!(game.world().stats.shots_fired, 1);
        assert_eq!(game.world().stats.ticks, 2);
    }

    #[test]
    fn frame_tracks_sink_viewport() {
        let mut game = GameLoop::default();
        let mut input = ScriptedInput::new([InputFrame::default(), InputFrame::default()]);
        let mut sink = MemorySink::new(Viewport::new(60, 20));

        game.run_frame(&mut input, &mut sink, DT).unwrap();
        let first = sink.last_frame().unwrap();
        assert_eq!((first.width(), first.height()), (60, 20));

        sink.set_viewport(Viewport::new(200, 100));
        game.run_frame(&mut input, &mut sink, DT).unwrap();
        let second = sink.last_frame().unwrap();
        assert_eq!((second.width(), second.height()), (120, 40));
    }
}
