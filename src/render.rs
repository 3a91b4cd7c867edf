//! Rendering interface
//!
//! Renderers only ever see a `Snapshot`. The text renderer here rasterises
//! the field onto a character grid for headless runs and logs.

use crate::engine::Snapshot;
use crate::sim::{GamePhase, Rect};

/// Draws one frame from a snapshot
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}

/// Message shown over the field for each phase
pub fn overlay_text(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Ready => Some("Press SPACE to start"),
        GamePhase::Playing => None,
        GamePhase::Paused => Some("Paused - press P to resume"),
        GamePhase::GameOver => Some("Game Over - press R to restart"),
        GamePhase::Win => Some("You Win! - press R to play again"),
    }
}

/// Character-grid renderer
///
/// Each cell covers `cell_w` x `cell_h` pixels of the field. Bricks are `#`,
/// the paddle `=`, the ball `o`. The last frame is kept for inspection.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    columns: usize,
    lines: usize,
    cell_w: f32,
    cell_h: f32,
    frame: String,
    frames_drawn: u64,
}

impl TextRenderer {
    pub fn new(field_width: f32, field_height: f32, columns: usize, lines: usize) -> Self {
        let columns = columns.max(1);
        let lines = lines.max(1);
        Self {
            columns,
            lines,
            cell_w: field_width / columns as f32,
            cell_h: field_height / lines as f32,
            frame: String::new(),
            frames_drawn: 0,
        }
    }

    /// Most recent frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Fill every cell whose area overlaps `rect`
    fn fill(&self, grid: &mut [Vec<char>], rect: &Rect, glyph: char) {
        let first_col = (rect.pos.x / self.cell_w).floor().max(0.0) as usize;
        let first_line = (rect.pos.y / self.cell_h).floor().max(0.0) as usize;
        let last_col = ((rect.right() / self.cell_w).ceil() as usize).min(self.columns);
        let last_line = ((rect.bottom() / self.cell_h).ceil() as usize).min(self.lines);

        for row in grid.iter_mut().take(last_line).skip(first_line) {
            for cell in row.iter_mut().take(last_col).skip(first_col) {
                *cell = glyph;
            }
        }
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        let mut grid = vec![vec![' '; self.columns]; self.lines];

        for brick in snapshot.bricks.iter().filter(|b| b.active) {
            self.fill(&mut grid, &brick.rect(), '#');
        }
        self.fill(&mut grid, &snapshot.paddle.rect(), '=');

        // Ball centre cell; nothing once it has left the field
        let ball = &snapshot.ball;
        let col = (ball.pos.x / self.cell_w).floor();
        let line = (ball.pos.y / self.cell_h).floor();
        let inside = col >= 0.0 && line >= 0.0;
        if inside && (col as usize) < self.columns && (line as usize) < self.lines {
            grid[line as usize][col as usize] = 'o';
        }

        let border = format!("+{}+", "-".repeat(self.columns));
        let mut out = String::with_capacity((self.columns + 3) * (self.lines + 4));
        out.push_str(&format!(
            "Score: {:<8} Lives: {:<3} [{}]\n",
            snapshot.score,
            snapshot.lives,
            snapshot.phase.as_str()
        ));
        out.push_str(&border);
        out.push('\n');
        for row in &grid {
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push_str(&border);
        if let Some(text) = overlay_text(snapshot.phase) {
            out.push('\n');
            out.push_str(text);
        }

        self.frame = out;
        self.frames_drawn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::Engine;

    #[test]
    fn test_overlay_per_phase() {
        assert!(overlay_text(GamePhase::Playing).is_none());
        for phase in [GamePhase::Ready, GamePhase::Paused, GamePhase::GameOver, GamePhase::Win] {
            assert!(overlay_text(phase).is_some());
        }
    }

    #[test]
    fn test_draws_entities() {
        let engine = Engine::new(GameConfig::default(), 1);
        let mut renderer = TextRenderer::new(800.0, 600.0, 80, 30);
        renderer.draw(&engine.snapshot());

        let frame = renderer.frame();
        assert!(frame.starts_with("Score: 0"));
        assert!(frame.contains('#'));
        assert!(frame.contains('='));
        // Ball at the centre of the field: column 40, line 15
        let ball_line = frame.lines().nth(2 + 15).unwrap();
        assert_eq!(ball_line.chars().nth(1 + 40), Some('o'));
        assert!(frame.ends_with("Press SPACE to start"));
        assert_eq!(renderer.frames_drawn(), 1);
    }

    #[test]
    fn test_destroyed_bricks_disappear() {
        let engine = Engine::new(GameConfig::default(), 1);
        let mut snap = engine.snapshot();
        for brick in &mut snap.bricks {
            brick.active = false;
        }
        let mut renderer = TextRenderer::new(800.0, 600.0, 80, 30);
        renderer.draw(&snap);
        assert!(!renderer.frame().contains('#'));
    }

    #[test]
    fn test_draw_does_not_touch_snapshot() {
        let engine = Engine::new(GameConfig::default(), 1);
        let snap = engine.snapshot();
        let copy = snap.clone();
        TextRenderer::new(800.0, 600.0, 40, 15).draw(&snap);
        assert_eq!(snap, copy);
    }
}
