//! Collision detection and response for the ball
//!
//! Everything here is an axis-aligned approximation: the ball is tested as
//! its bounding box against rectangles, and brick bounces pick a single axis
//! to reflect on instead of computing a true contact normal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_BOUNCE_ANGLE;

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Which velocity component a bounce negates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    /// Hit a left/right face: negate `vel.x`
    Horizontal,
    /// Hit a top/bottom face: negate `vel.y`
    Vertical,
}

impl BounceAxis {
    /// Reflect a velocity on this axis (magnitude is unchanged)
    #[inline]
    pub fn reflect(self, vel: Vec2) -> Vec2 {
        match self {
            BounceAxis::Horizontal => Vec2::new(-vel.x, vel.y),
            BounceAxis::Vertical => Vec2::new(vel.x, -vel.y),
        }
    }
}

/// Approximate circle/rectangle overlap: the circle's extent on each axis
/// must strictly overlap the rectangle's. Corners count as overlapping.
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius > rect.pos.x
        && center.x - radius < rect.right()
        && center.y + radius > rect.pos.y
        && center.y - radius < rect.bottom()
}

/// Pick the face of a brick the ball struck
///
/// The centre offset is compared against the brick's half-extents inflated
/// by the ball radius. Ties resolve to `Horizontal`.
pub fn brick_bounce_axis(center: Vec2, radius: f32, rect: &Rect) -> BounceAxis {
    let offset = center - rect.center();
    let half_w = (rect.size.x + 2.0 * radius) / 2.0;
    let half_h = (rect.size.y + 2.0 * radius) / 2.0;

    if (half_w * offset.y).abs() > (half_h * offset.x).abs() {
        BounceAxis::Vertical
    } else {
        BounceAxis::Horizontal
    }
}

/// Velocity after leaving the paddle
///
/// Where the ball lands across the paddle maps linearly onto
/// `[-MAX_BOUNCE_ANGLE/2, MAX_BOUNCE_ANGLE/2]` off vertical. Speed is kept and
/// the result always points up.
pub fn paddle_bounce_velocity(ball_x: f32, vel: Vec2, paddle: &Rect) -> Vec2 {
    let hit = ((ball_x - paddle.pos.x) / paddle.size.x).clamp(0.0, 1.0);
    let angle = (hit - 0.5) * MAX_BOUNCE_ANGLE;
    let speed = vel.length();

    Vec2::new(angle.sin() * speed, -(angle.cos() * speed).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_circle_rect_overlap() {
        let rect = Rect::new(100.0, 100.0, 50.0, 20.0);

        assert!(circle_intersects_rect(Vec2::new(125.0, 110.0), 5.0, &rect));
        // Just touching is not an overlap (strict comparisons)
        assert!(!circle_intersects_rect(Vec2::new(95.0, 110.0), 5.0, &rect));
        assert!(!circle_intersects_rect(Vec2::new(125.0, 125.0), 5.0, &rect));
        assert!(circle_intersects_rect(Vec2::new(125.0, 124.9), 5.0, &rect));
        // Clear miss
        assert!(!circle_intersects_rect(Vec2::new(300.0, 300.0), 5.0, &rect));
    }

    #[test]
    fn test_corner_counts_as_overlap() {
        // Exact distance to the corner is 4.2 * sqrt(2) ≈ 5.94 > radius 5,
        // but the box test still reports a hit.
        let rect = Rect::new(100.0, 100.0, 50.0, 20.0);
        let center = Vec2::new(95.8, 95.8);
        assert!((center - rect.pos).length() > 5.0);
        assert!(circle_intersects_rect(center, 5.0, &rect));
    }

    #[test]
    fn test_bounce_axis_top_and_side() {
        let rect = Rect::new(0.0, 0.0, 75.0, 20.0);

        // Above the centre: vertical reflection
        assert_eq!(brick_bounce_axis(Vec2::new(37.5, -5.0), 8.0, &rect), BounceAxis::Vertical);
        // Beside the centre: horizontal reflection
        assert_eq!(brick_bounce_axis(Vec2::new(-5.0, 10.0), 8.0, &rect), BounceAxis::Horizontal);
    }

    #[test]
    fn test_bounce_axis_tie_is_horizontal() {
        // half_w = 10, half_h = 10 for a square brick with radius 0.
        let rect = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert_eq!(brick_bounce_axis(Vec2::new(15.0, 15.0), 0.0, &rect), BounceAxis::Horizontal);
        // Dead centre is also a tie
        assert_eq!(brick_bounce_axis(rect.center(), 0.0, &rect), BounceAxis::Horizontal);
    }

    #[test]
    fn test_reflect_preserves_speed() {
        let vel = Vec2::new(3.0, -4.0);
        for axis in [BounceAxis::Horizontal, BounceAxis::Vertical] {
            assert!((axis.reflect(vel).length() - 5.0).abs() < EPS);
        }
        assert_eq!(BounceAxis::Horizontal.reflect(vel), Vec2::new(-3.0, -4.0));
        assert_eq!(BounceAxis::Vertical.reflect(vel), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_paddle_centre_hit_goes_straight_up() {
        let paddle = Rect::new(100.0, 500.0, 100.0, 15.0);
        let vel = paddle_bounce_velocity(150.0, Vec2::new(4.0, 4.0), &paddle);
        assert!(vel.x.abs() < EPS);
        assert!((vel.y + 32.0_f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_paddle_edges_deflect_to_max_angle() {
        let paddle = Rect::new(100.0, 500.0, 100.0, 15.0);
        let incoming = Vec2::new(0.0, 5.0);

        let left = paddle_bounce_velocity(100.0, incoming, &paddle);
        let right = paddle_bounce_velocity(200.0, incoming, &paddle);
        let max = MAX_BOUNCE_ANGLE / 2.0;

        assert!((left.x - (-max).sin() * 5.0).abs() < EPS);
        assert!((right.x - max.sin() * 5.0).abs() < EPS);
        assert!(left.y < 0.0 && right.y < 0.0);

        // Overhanging hits clamp to the edge angle
        let beyond = paddle_bounce_velocity(230.0, incoming, &paddle);
        assert!((beyond - right).length() < EPS);
    }
}
