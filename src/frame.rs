//! Frame driver
//!
//! One iteration per display frame: let the controller press keys, apply the
//! queued controls, tick the engine, hand the snapshot to the renderer.
//! Stops when the engine is cancelled or the frame budget runs out.

use crate::engine::{Engine, Snapshot};
use crate::input::{InputAdapter, Key};
use crate::render::Renderer;
use crate::sim::GamePhase;

/// Produces raw key events for the next frame
pub trait Controller {
    fn control(&mut self, snapshot: &Snapshot, input: &mut InputAdapter);
}

impl<F> Controller for F
where
    F: FnMut(&Snapshot, &mut InputAdapter),
{
    fn control(&mut self, snapshot: &Snapshot, input: &mut InputAdapter) {
        self(snapshot, input)
    }
}

/// Plays by chasing the ball, leaning the paddle so the bounce heads
/// toward the nearest standing brick
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Horizontal distance tolerated before the paddle moves
    pub dead_zone: f32,
    /// Press restart after the session ends
    pub auto_restart: bool,
}

impl Autopilot {
    pub fn new(dead_zone: f32) -> Self {
        Self {
            dead_zone,
            auto_restart: false,
        }
    }

    fn hold(input: &mut InputAdapter, key: Key, down: bool) {
        if down && !input.is_held(key) {
            input.key_down(key);
        } else if !down && input.is_held(key) {
            input.key_up(key);
        }
    }
}

impl Controller for Autopilot {
    fn control(&mut self, snapshot: &Snapshot, input: &mut InputAdapter) {
        match snapshot.phase {
            GamePhase::Ready => {
                input.key_down(Key::Space);
                input.key_up(Key::Space);
            }
            GamePhase::GameOver | GamePhase::Win if self.auto_restart => {
                input.key_down(Key::KeyR);
                input.key_up(Key::KeyR);
            }
            _ => {}
        }

        let ball_x = snapshot.ball.pos.x;
        let target_x = snapshot
            .bricks
            .iter()
            .filter(|b| b.active)
            .map(|b| b.rect().center().x)
            .min_by(|a, b| (a - ball_x).abs().total_cmp(&(b - ball_x).abs()));
        // Off-centre hits deflect toward the side the ball lands on
        let lean = target_x
            .map(|x| ((x - ball_x) / 200.0).clamp(-1.0, 1.0) * snapshot.paddle.width * 0.35)
            .unwrap_or(0.0);

        let offset = ball_x - lean - snapshot.paddle.center_x();
        Self::hold(input, Key::ArrowLeft, offset < -self.dead_zone);
        Self::hold(input, Key::ArrowRight, offset > self.dead_zone);
    }
}

/// Drives an engine frame by frame
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    /// Stop after this many frames (None = until cancelled)
    pub max_frames: Option<u64>,
    /// Cancel the engine once the session reaches `GameOver` or `Win`
    pub stop_when_finished: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            max_frames,
            stop_when_finished: false,
            frames: 0,
        }
    }

    /// Frames run so far across all `run` calls
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run until the engine is cancelled or the budget is spent. Returns the
    /// number of frames run by this call.
    pub fn run(
        &mut self,
        engine: &mut Engine,
        input: &mut InputAdapter,
        controller: &mut impl Controller,
        renderer: &mut impl Renderer,
    ) -> u64 {
        let start = self.frames;
        let mut snapshot = engine.snapshot();

        while engine.is_running() && self.max_frames.is_none_or(|max| self.frames < max) {
            controller.control(&snapshot, input);
            for control in input.drain_controls() {
                engine.control(control);
            }

            let Some(next) = engine.tick(&input.tick_input()) else {
                break;
            };
            renderer.draw(&next);
            self.frames += 1;

            if self.stop_when_finished && next.phase.is_finished() {
                log::info!(
                    "Session finished ({}) after {} frames",
                    next.phase.as_str(),
                    self.frames
                );
                engine.cancel();
            }
            snapshot = next;
        }

        self.frames - start
    }
}
