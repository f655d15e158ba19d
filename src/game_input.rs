use winit::event::VirtualKeyCode;

use crate::snake::Direction;

/// What the player asked for since the last tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameInput {
    pending: Option<Direction>,
}

impl GameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrow keys only.
    pub fn key_to_direction(key: VirtualKeyCode) -> Option<Direction> {
        match key {
            VirtualKeyCode::Left => Some(Direction::Left),
            VirtualKeyCode::Right => Some(Direction::Right),
            VirtualKeyCode::Up => Some(Direction::Up),
            VirtualKeyCode::Down => Some(Direction::Down),
            _ => None,
        }
    }

    /// Latches a key press; the latest one wins.
    pub fn press(&mut self, key: VirtualKeyCode) {
        if let Some(dir) = Self::key_to_direction(key) {
            self.pending = Some(dir);
        }
    }

    /// Hands the latched direction to the tick and clears it.
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }
}

/// Reversal guard: a request for the exact opposite direction is ignored.
pub fn steer(current: Direction, requested: Option<Direction>) -> Direction {
    match requested {
        Some(dir) if dir != current.opposite() => dir,
        _ => current,
    }
}
