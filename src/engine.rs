//! Simulation engine
//!
//! The single owner of the game state. Commands and ticks are the only ways
//! in; snapshots are the only way out.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::input::Control;
use crate::sim::{
    Ball, Brick, Command, GameEvent, GamePhase, GameState, Paddle, TickInput, transition, update,
};

/// Read-only copy of everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: Vec<Brick>,
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
}

/// Owns the config and state, gates simulation on phase and on the frame
/// loop's running flag
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    state: GameState,
    running: bool,
}

impl Engine {
    /// Fresh session in `Ready`, frame loop running. `config` is expected to
    /// have passed `GameConfig::validate`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let checked = config.validate();
        if let Err(e) = &checked {
            log::warn!("New session with {e}");
        }
        debug_assert!(checked.is_ok(), "Engine::new with {checked:?}");

        let state = GameState::new(&config, seed);
        log::info!(
            "New session (seed {seed}): {}x{} bricks, {} lives",
            config.rows,
            config.cols,
            config.starting_lives
        );
        Self::from_state(config, state)
    }

    /// Take over an existing state (replays, tests)
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        Self {
            config,
            state,
            running: true,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Apply a phase command. Returns whether it was accepted; undefined
    /// pairs leave everything untouched.
    pub fn command(&mut self, command: Command) -> bool {
        let from = self.state.phase;
        let Some(to) = transition(from, command) else {
            log::debug!("Ignored {command:?} in {}", from.as_str());
            return false;
        };

        if command == Command::Restart {
            self.state.reset(&self.config);
        }
        self.state.phase = to;
        log::info!("Phase {} -> {} ({command:?})", from.as_str(), to.as_str());
        true
    }

    /// Apply a player control, resolving the pause toggle against the
    /// current phase
    pub fn control(&mut self, control: Control) -> bool {
        let command = match control {
            Control::Start => Command::Start,
            Control::Restart => Command::Restart,
            Control::PauseToggle if self.state.phase == GamePhase::Paused => Command::Resume,
            Control::PauseToggle => Command::Pause,
        };
        self.command(command)
    }

    /// Advance one simulation step (no-op outside `Playing`)
    pub fn update(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let events = update(&mut self.state, &self.config, input);
        for event in &events {
            match event {
                GameEvent::PaddleHit => {
                    log::debug!("Paddle hit at x={:.1}", self.state.ball.pos.x)
                }
                GameEvent::BrickDestroyed { row, col, points } => log::debug!(
                    "Brick ({row}, {col}) destroyed for {points}, score {}",
                    self.state.score
                ),
                GameEvent::LifeLost { remaining } => {
                    log::info!("Ball lost, {remaining} lives left")
                }
                GameEvent::GameOver => log::info!("Game over with score {}", self.state.score),
                GameEvent::Won => log::info!("All bricks cleared with score {}", self.state.score),
            }
        }
        events
    }

    /// One frame: update, then snapshot. Returns `None` once cancelled.
    pub fn tick(&mut self, input: &TickInput) -> Option<Snapshot> {
        if !self.running {
            return None;
        }
        self.update(input);
        Some(self.snapshot())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.state.ball,
            paddle: self.state.paddle,
            bricks: self.state.bricks.clone(),
            score: self.state.score,
            lives: self.state.lives,
            phase: self.state.phase,
        }
    }

    /// Stop ticking; later `tick` calls do nothing
    pub fn cancel(&mut self) {
        if self.running {
            log::debug!("Frame loop cancelled");
        }
        self.running = false;
    }

    /// Restart ticking. Returns `false` if the loop was already running.
    pub fn resume(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        log::debug!("Frame loop resumed");
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn engine() -> Engine {
        Engine::new(GameConfig::default(), 12345)
    }

    #[test]
    fn test_start_pause_resume() {
        let mut engine = engine();
        assert_eq!(engine.phase(), GamePhase::Ready);

        assert!(engine.control(Control::Start));
        assert_eq!(engine.phase(), GamePhase::Playing);

        assert!(engine.control(Control::PauseToggle));
        assert_eq!(engine.phase(), GamePhase::Paused);

        assert!(engine.control(Control::PauseToggle));
        assert_eq!(engine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_invalid_commands_ignored() {
        let mut engine = engine();
        assert!(!engine.command(Command::Pause));
        assert!(!engine.command(Command::Resume));
        assert!(!engine.command(Command::Restart));
        assert!(!engine.control(Control::PauseToggle));
        assert_eq!(engine.phase(), GamePhase::Ready);
    }

    #[test]
    fn test_paused_freezes_everything() {
        let mut engine = engine();
        engine.command(Command::Start);
        engine.tick(&TickInput::default());
        engine.command(Command::Pause);

        let before = engine.snapshot();
        for _ in 0..20 {
            let snap = engine.tick(&TickInput { left: true, right: false }).unwrap();
            assert_eq!(snap, before);
        }
    }

    #[test]
    fn test_life_lost_scenario() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 3);
        // Falling straight down the left side, clear of bricks and paddle
        state.ball.pos = Vec2::new(100.0, 300.0);
        state.ball.vel = Vec2::new(0.0, 4.0);
        let mut engine = Engine::from_state(config.clone(), state);
        engine.command(Command::Start);

        let mut ticks = 0;
        while engine.phase() == GamePhase::Playing {
            engine.tick(&TickInput::default());
            ticks += 1;
            assert!(ticks < 200, "ball never fell");
        }

        let snap = engine.snapshot();
        assert_eq!(snap.lives, 2);
        assert_eq!(snap.phase, GamePhase::Ready);
        assert_eq!(snap.ball.pos, config.field_center());
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_restart_after_game_over() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 3);
        state.phase = GamePhase::GameOver;
        state.lives = 0;
        state.score = 120;
        for brick in state.bricks.iter_mut().take(5) {
            brick.active = false;
        }
        state.ball.pos = Vec2::new(12.0, 640.0);
        state.paddle.pos.x = 0.0;
        let mut engine = Engine::from_state(config.clone(), state);

        assert!(!engine.command(Command::Start));
        assert!(engine.control(Control::Restart));

        let snap = engine.snapshot();
        assert_eq!(snap.phase, GamePhase::Ready);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.lives, 3);
        assert!(snap.bricks.iter().all(|b| b.active));
        assert_eq!(snap.ball.pos, config.field_center());
        assert_eq!(snap.paddle.pos.x, 350.0);
    }

    #[test]
    fn test_restart_after_win() {
        let config = GameConfig { rows: 1, cols: 1, ..Default::default() };
        let mut state = GameState::new(&config, 3);
        state.ball.pos = Vec2::new(72.5, 81.0);
        state.ball.vel = Vec2::new(0.0, -4.0);
        let mut engine = Engine::from_state(config, state);
        engine.command(Command::Start);

        engine.tick(&TickInput::default());
        assert_eq!(engine.phase(), GamePhase::Win);

        assert!(engine.command(Command::Restart));
        assert_eq!(engine.phase(), GamePhase::Ready);
        assert_eq!(engine.state().active_bricks(), 1);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut engine = engine();
        engine.command(Command::Start);
        assert!(engine.tick(&TickInput::default()).is_some());

        engine.cancel();
        let before = engine.state().clone();
        assert!(engine.tick(&TickInput::default()).is_none());
        assert_eq!(engine.state(), &before);

        assert!(engine.resume());
        assert!(!engine.resume(), "second resume must not start another loop");
        assert!(engine.tick(&TickInput::default()).is_some());
        assert_eq!(engine.state().time_ticks, before.time_ticks + 1);
    }

    #[test]
    fn test_new_keeps_config() {
        let config = GameConfig { rows: 2, cols: 4, starting_lives: 5, ..Default::default() };
        let engine = Engine::new(config.clone(), 1);
        assert_eq!(engine.config(), &config);
        assert_eq!(engine.state().bricks.len(), config.brick_count());
        assert_eq!(engine.state().lives, 5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "brick grid must not be empty")]
    fn test_new_rejects_empty_grid() {
        Engine::new(GameConfig { rows: 0, ..Default::default() }, 1);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut engine = engine();
        let mut snap = engine.snapshot();
        snap.score = 9999;
        snap.bricks.clear();
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().active_bricks(), 45);
        engine.command(Command::Start);
        assert_eq!(engine.snapshot().phase, GamePhase::Playing);
    }
}
