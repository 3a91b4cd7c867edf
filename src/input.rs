//! Input adapter
//!
//! Raw key events become two things: a held-key set queried once per tick,
//! and discrete phase controls queued until the frame driver drains them.
//! Nothing here touches the simulation directly.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    KeyA,
    KeyD,
    Space,
    Enter,
    KeyP,
    Escape,
    KeyR,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code` / `key` value
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "ArrowLeft" | "Left" => Some(Key::ArrowLeft),
            "ArrowRight" | "Right" => Some(Key::ArrowRight),
            "KeyA" | "a" | "A" => Some(Key::KeyA),
            "KeyD" | "d" | "D" => Some(Key::KeyD),
            "Space" | " " => Some(Key::Space),
            "Enter" | "NumpadEnter" => Some(Key::Enter),
            "KeyP" | "p" | "P" => Some(Key::KeyP),
            "Escape" | "Esc" => Some(Key::Escape),
            "KeyR" | "r" | "R" => Some(Key::KeyR),
            _ => None,
        }
    }

    fn steers_left(self) -> bool {
        matches!(self, Key::ArrowLeft | Key::KeyA)
    }

    fn steers_right(self) -> bool {
        matches!(self, Key::ArrowRight | Key::KeyD)
    }

    /// Control emitted when this key goes down
    pub fn control(self) -> Option<Control> {
        match self {
            Key::Space | Key::Enter => Some(Control::Start),
            Key::KeyP | Key::Escape => Some(Control::PauseToggle),
            Key::KeyR => Some(Control::Restart),
            _ => None,
        }
    }
}

/// Discrete phase controls from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Start,
    PauseToggle,
    Restart,
}

/// Tracks held keys and queued controls
#[derive(Debug, Default)]
pub struct InputAdapter {
    held: HashSet<Key>,
    pending: Vec<Control>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Repeats are not filtered: every press of a
    /// control key queues its control.
    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
        if let Some(control) = key.control() {
            self.pending.push(control);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Drop every held key (e.g. when the host loses focus)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Held directions for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.held.iter().any(|k| k.steers_left()),
            right: self.held.iter().any(|k| k.steers_right()),
        }
    }

    /// Take queued controls in arrival order
    pub fn drain_controls(&mut self) -> Vec<Control> {
        std::mem::take(&mut self.pending)
    }
}
