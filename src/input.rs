//! Keyboard input state
//!
//! Key events write into `InputState` whenever they arrive; the simulation
//! reads a `DirectionInput` snapshot once per tick. Nothing is reset on read.

use std::collections::HashMap;

/// `KeyboardEvent.code` values steering the ship
pub mod keys {
    pub const UP: &str = "ArrowUp";
    pub const DOWN: &str = "ArrowDown";
    pub const LEFT: &str = "ArrowLeft";
    pub const RIGHT: &str = "ArrowRight";
}

/// Directions held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Held/released flag per key code
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down notification
    pub fn key_down(&mut self, code: &str) {
        self.keys.insert(code.to_string(), true);
    }

    /// Handle a key-up notification
    pub fn key_up(&mut self, code: &str) {
        self.keys.insert(code.to_string(), false);
    }

    pub fn is_held(&self, code: &str) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    /// Snapshot of the four steering keys
    pub fn directions(&self) -> DirectionInput {
        DirectionInput {
            up: self.is_held(keys::UP),
            down: self.is_held(keys::DOWN),
            left: self.is_held(keys::LEFT),
            right: self.is_held(keys::RIGHT),
        }
    }
}
