//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod phase;
pub mod state;
pub mod tick;

pub use collision::{
    BounceAxis, Rect, brick_bounce_axis, circle_intersects_rect, paddle_bounce_velocity,
};
pub use phase::{Command, transition};
pub use state::{
    Ball, Brick, GameEvent, GamePhase, GameState, Paddle, RngState, build_bricks, points_for_row,
};
pub use tick::{TickInput, update};
