//! Brick Breaker - a ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, phase machine, tick)
//! - `engine`: Owns the game state, exposes tick/cancel/resume and snapshots
//! - `input`: Raw key events to held directions and phase controls
//! - `render`: Renderer interface and a text renderer
//! - `frame`: Frame driver tying input, engine and renderer together
//! - `config`: Data-driven field and physics constants

pub mod config;
pub mod engine;
pub mod frame;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use engine::{Engine, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Gap between the paddle's bottom edge and the bottom of the field
    pub const PADDLE_BOTTOM_GAP: f32 = 10.0;

    /// Full spread of paddle deflection angles (±54° off vertical)
    pub const MAX_BOUNCE_ANGLE: f32 = 0.6 * std::f32::consts::PI;

    /// Points per row step; row 0 is worth `rows * BRICK_ROW_POINTS`
    pub const BRICK_ROW_POINTS: u32 = 10;

    /// Brick colors by row (0xRRGGBB), cycled when there are more rows
    pub const BRICK_ROW_COLORS: [u32; 5] = [0xFF4D4D, 0xFF9F43, 0xFECA57, 0x1DD1A1, 0x54A0FF];

    /// Default seed for sessions that don't supply one
    pub const DEFAULT_SEED: u64 = 0x5EED_B41C;
}
