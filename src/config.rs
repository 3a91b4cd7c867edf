//! Game configuration
//!
//! Every tunable constant of the field, paddle, ball and brick grid. Loaded
//! from JSON with camelCase keys; missing keys fall back to the defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PADDLE_BOTTOM_GAP;

/// Field dimensions and physical constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal movement per tick while a direction is held
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis launch speed in px/tick
    pub ball_speed: f32,

    // === Bricks ===
    pub rows: u32,
    pub cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,

    // === Session ===
    pub starting_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,

            paddle_width: 100.0,
            paddle_height: 15.0,
            paddle_speed: 7.0,

            ball_radius: 8.0,
            ball_speed: 4.0,

            rows: 5,
            cols: 9,
            brick_width: 75.0,
            brick_height: 20.0,
            padding: 10.0,
            offset_top: 50.0,
            offset_left: 35.0,

            starting_lives: 3,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject configs the simulation can't lay out
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("fieldWidth", self.field_width),
            ("fieldHeight", self.field_height),
            ("paddleWidth", self.paddle_width),
            ("paddleHeight", self.paddle_height),
            ("paddleSpeed", self.paddle_speed),
            ("ballRadius", self.ball_radius),
            ("ballSpeed", self.ball_speed),
            ("brickWidth", self.brick_width),
            ("brickHeight", self.brick_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        let non_negative = [
            ("padding", self.padding),
            ("offsetTop", self.offset_top),
            ("offsetLeft", self.offset_left),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "brick grid must not be empty, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("startingLives must be at least 1".to_string()));
        }
        if self.paddle_width > self.field_width {
            return Err(ConfigError::Invalid(format!(
                "paddleWidth {} exceeds fieldWidth {}",
                self.paddle_width, self.field_width
            )));
        }
        if self.paddle_y() <= 0.0 {
            return Err(ConfigError::Invalid("field is too short for the paddle".to_string()));
        }
        let grid_right =
            self.offset_left + self.cols as f32 * (self.brick_width + self.padding) - self.padding;
        if grid_right > self.field_width {
            return Err(ConfigError::Invalid(format!(
                "brick grid ends at x={grid_right}, past fieldWidth {}",
                self.field_width
            )));
        }
        Ok(())
    }

    /// Number of bricks in the grid
    #[inline]
    pub fn brick_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Fixed top edge of the paddle
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height - PADDLE_BOTTOM_GAP
    }

    /// Centre of the play field (ball spawn point)
    #[inline]
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}

/// Why a config couldn't be loaded
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
