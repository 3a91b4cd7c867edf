//! Per-frame simulation tick
//!
//! Advances the state by exactly one step. Nothing moves unless the phase is
//! `Playing`.

use super::collision::{brick_bounce_axis, circle_intersects_rect, paddle_bounce_velocity};
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::GameConfig;

/// Held directions for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// -1 for left, 1 for right, 0 for neither or both
    #[inline]
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance the game state by one tick
///
/// Order matters: move, walls, bottom loss, paddle input, paddle hit, brick
/// hit, clear check. A lost ball ends the tick early.
pub fn update(state: &mut GameState, config: &GameConfig, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Integrate
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Side and top walls (bottom is open)
    if ball.pos.x + ball.radius > config.field_width || ball.pos.x - ball.radius < 0.0 {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
    }

    // Fell past the bottom
    if ball.pos.y - ball.radius > config.field_height {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost { remaining: state.lives });
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver);
        } else {
            state.respawn_ball(config);
            state.phase = GamePhase::Ready;
        }
        return events;
    }

    state.paddle.steer(input.direction(), config.field_width);

    // Paddle: angle remap, then rest on top of it so the next tick can't hit again
    let paddle = state.paddle.rect();
    let ball = &mut state.ball;
    if circle_intersects_rect(ball.pos, ball.radius, &paddle) {
        ball.vel = paddle_bounce_velocity(ball.pos.x, ball.vel, &paddle);
        ball.pos.y = paddle.pos.y - ball.radius;
        events.push(GameEvent::PaddleHit);
    }

    // First active brick in row-major order wins; one brick per tick
    if let Some(brick) = state
        .bricks
        .iter_mut()
        .find(|b| b.active && circle_intersects_rect(ball.pos, ball.radius, &b.rect()))
    {
        let axis = brick_bounce_axis(ball.pos, ball.radius, &brick.rect());
        ball.vel = axis.reflect(ball.vel);
        brick.active = false;
        state.score += u64::from(brick.points);
        events.push(GameEvent::BrickDestroyed {
            row: brick.row,
            col: brick.col,
            points: brick.points,
        });
    }

    if state.bricks.iter().all(|b| !b.active) {
        state.phase = GamePhase::Win;
        events.push(GameEvent::Won);
    }

    events
}
