//! Phase transitions driven by player commands
//!
//! Engine-driven transitions (ball lost, lives exhausted, grid cleared)
//! happen inside `tick::update`; this table only covers explicit commands.

use serde::{Deserialize, Serialize};

use super::state::GamePhase;

/// Explicit phase commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Start,
    Pause,
    Resume,
    /// Back to `Ready` with a fresh grid (only after the session ended)
    Restart,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Start,
        Command::Pause,
        Command::Resume,
        Command::Restart,
    ];
}

/// Phase reached by applying `command` in `phase`, or `None` when the pair
/// is undefined and the command is ignored
pub fn transition(phase: GamePhase, command: Command) -> Option<GamePhase> {
    match (phase, command) {
        (GamePhase::Ready, Command::Start) => Some(GamePhase::Playing),
        (GamePhase::Playing, Command::Pause) => Some(GamePhase::Paused),
        (GamePhase::Paused, Command::Resume) => Some(GamePhase::Playing),
        (GamePhase::GameOver | GamePhase::Win, Command::Restart) => Some(GamePhase::Ready),
        _ => None,
    }
}
