use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::border::Field;
use crate::error::{Error, Result};
use crate::snake::Direction;
use crate::utils::Point;

/// Who steers the snake.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Manual,
    Autopilot,
}

/// Window, grid and pacing settings for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub block: i32,
    /// ticks per second
    pub fps: u32,
    pub initial_length: usize,
    pub variant: Variant,
}

impl GameConfig {
    /// Arrow-key game: 640x480 at 7 ticks per second.
    pub fn manual() -> Self {
        Self {
            title: "SnakeV1".to_string(),
            width: 640,
            height: 480,
            block: 20,
            fps: 7,
            initial_length: 3,
            variant: Variant::Manual,
        }
    }

    /// Coin-flip demo: 200x200 at 20 ticks per second.
    pub fn autopilot() -> Self {
        Self {
            width: 200,
            height: 200,
            fps: 20,
            variant: Variant::Autopilot,
            ..Self::manual()
        }
    }

    pub fn field(&self) -> Field {
        Field::new(self.width, self.height, self.block)
    }

    /// Starting head: field centre, one block lower for the autopilot so it
    /// starts on an odd row.
    pub fn start_head(&self) -> Point {
        let centre = Point::new(self.width / 2, self.height / 2);
        match self.variant {
            Variant::Manual => centre,
            Variant::Autopilot => centre.offset(0, self.block),
        }
    }

    pub fn start_direction(&self) -> Direction {
        Direction::Right
    }

    /// Time budget of one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.block <= 0 {
            return Err(Error::InvalidConfig(format!("block size {} must be positive", self.block)));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "field {}x{} must be positive",
                self.width, self.height
            )));
        }
        if self.width % self.block != 0 || self.height % self.block != 0 {
            return Err(Error::InvalidConfig(format!(
                "field {}x{} is not a multiple of block size {}",
                self.width, self.height, self.block
            )));
        }
        if self.fps == 0 {
            return Err(Error::InvalidConfig("fps must be positive".to_string()));
        }
        if self.initial_length < 3 {
            return Err(Error::InvalidConfig(format!(
                "initial length {} is below 3",
                self.initial_length
            )));
        }
        let field = self.field();
        let head = self.start_head();
        let tail = head.offset(-self.block * (self.initial_length as i32 - 1), 0);
        if !field.is_inside(head) || !field.is_inside(tail) {
            return Err(Error::InvalidConfig(format!(
                "starting snake at {:?} of length {} does not fit in {}x{}",
                head, self.initial_length, self.width, self.height
            )));
        }
        if field.cell_count() <= self.initial_length {
            return Err(Error::InvalidConfig(format!(
                "no room for food next to a snake of length {}",
                self.initial_length
            )));
        }
        if (head.x % self.block != 0) || (head.y % self.block != 0) {
            return Err(Error::InvalidConfig(format!(
                "starting head {:?} is not aligned to block size {}",
                head, self.block
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::manual()
    }
}
