//! Game state and core simulation types
//!
//! Plain entity records plus the complete session state. Construction and
//! reset live here; every per-tick mutation lives in `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball waiting at the centre for the start command
    Ready,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Out of lives
    GameOver,
    /// Every brick cleared
    Win,
}

impl GamePhase {
    pub const ALL: [GamePhase; 5] = [
        GamePhase::Ready,
        GamePhase::Playing,
        GamePhase::Paused,
        GamePhase::GameOver,
        GamePhase::Win,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
            GamePhase::Win => "win",
        }
    }

    /// The session has ended and only a restart leaves this phase
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the field centre for a fresh session, heading up and right
    pub fn serve(config: &GameConfig) -> Self {
        Self {
            pos: config.field_center(),
            vel: Vec2::new(config.ball_speed, -config.ball_speed),
            radius: config.ball_radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y never changes
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal movement per tick
    pub speed: f32,
}

impl Paddle {
    /// Paddle centred horizontally just above the bottom of the field
    pub fn centered(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new((config.field_width - config.paddle_width) / 2.0, config.paddle_y()),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Move by `direction * speed` (direction in [-1, 1]) and clamp to the field
    pub fn steer(&mut self, direction: f32, field_width: f32) {
        let max_x = (field_width - self.width).max(0.0);
        self.pos.x = (self.pos.x + direction * self.speed).clamp(0.0, max_x);
    }
}

/// A brick in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub row: u32,
    pub col: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// 0xRRGGBB, cosmetic only
    pub color: u32,
    /// Cleared once hit; only a grid rebuild brings it back
    pub active: bool,
    pub points: u32,
}

impl Brick {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Points awarded for a brick in `row`
#[inline]
pub fn points_for_row(rows: u32, row: u32) -> u32 {
    rows.saturating_sub(row) * BRICK_ROW_POINTS
}

/// Build the full brick grid in row-major order
pub fn build_bricks(config: &GameConfig) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(config.brick_count());
    for row in 0..config.rows {
        let color = BRICK_ROW_COLORS[row as usize % BRICK_ROW_COLORS.len()];
        for col in 0..config.cols {
            bricks.push(Brick {
                row,
                col,
                pos: Vec2::new(
                    col as f32 * (config.brick_width + config.padding) + config.offset_left,
                    row as f32 * (config.brick_height + config.padding) + config.offset_top,
                ),
                width: config.brick_width,
                height: config.brick_height,
                color,
                active: true,
                points: points_for_row(config.rows, row),
            });
        }
    }
    bricks
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleHit,
    BrickDestroyed { row: u32, col: u32, points: u32 },
    LifeLost { remaining: u32 },
    GameOver,
    Won,
}

/// RNG state wrapper for serialization
///
/// Each draw reseeds from `(seed, draws)` so the stream position survives a
/// save/restore of the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Rng for the next draw; advances the stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::seed_from_u64(self.seed ^ self.draws.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.draws += 1;
        rng
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u64,
    /// Simulated ticks (only counts ticks spent in `Playing`)
    pub time_ticks: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major, same order as built
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Fresh session in `Ready`
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            phase: GamePhase::Ready,
            lives: config.starting_lives,
            score: 0,
            time_ticks: 0,
            ball: Ball::serve(config),
            paddle: Paddle::centered(config),
            bricks: build_bricks(config),
        }
    }

    /// Full reset: score, lives, grid, ball and paddle. The RNG stream
    /// carries on so consecutive games differ.
    pub fn reset(&mut self, config: &GameConfig) {
        self.phase = GamePhase::Ready;
        self.lives = config.starting_lives;
        self.score = 0;
        self.time_ticks = 0;
        self.ball = Ball::serve(config);
        self.paddle = Paddle::centered(config);
        self.bricks = build_bricks(config);
    }

    /// Put a new ball at the centre after a lost life: random horizontal
    /// direction, always falling toward the paddle
    pub fn respawn_ball(&mut self, config: &GameConfig) {
        let mut rng = self.rng_state.next_rng();
        let dx = if rng.random_bool(0.5) { config.ball_speed } else { -config.ball_speed };
        self.ball = Ball {
            pos: config.field_center(),
            vel: Vec2::new(dx, config.ball_speed),
            radius: config.ball_radius,
        };
    }

    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }
}
