//! Sampled player input consumed at the start of each tick.

use serde::{Deserialize, Serialize};

use crate::enums::MoveKey;
use crate::types::Position;

/// Movement keys currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn set(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Up => self.up = held,
            MoveKey::Down => self.down = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::Up => self.up,
            MoveKey::Down => self.down,
            MoveKey::Left => self.left,
            MoveKey::Right => self.right,
        }
    }

    /// Held keys in fixed up, down, left, right order.
    pub fn iter(&self) -> impl Iterator<Item = MoveKey> + '_ {
        [MoveKey::Up, MoveKey::Down, MoveKey::Left, MoveKey::Right]
            .into_iter()
            .filter(|k| self.is_held(*k))
    }
}

/// Everything the simulation reads from the input devices for one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputFrame {
    pub held: HeldKeys,
    /// Latest pointer position in arena coordinates.
    pub pointer: Position,
    /// Click positions queued since the previous tick, oldest first.
    pub clicks: Vec<Position>,
}

impl InputFrame {
    /// A frame with no keys held, no clicks, pointer at `pointer`.
    pub fn idle(pointer: Position) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }
}
