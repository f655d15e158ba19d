use log::{Level, debug, info, log_enabled};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::autopilot;
use crate::border::Field;
use crate::config::{GameConfig, Variant};
use crate::error::{Error, Result};
use crate::food::Food;
use crate::game_input;
use crate::snake::{Direction, Snake};
use crate::utils::Point;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Running,
    Terminated,
}

/// Result of one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub game_over: bool,
    pub score: u32,
}

/// Snapshot taken after a tick, used for replays and debug logging.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub step: u64,
    pub direction: Direction,
    pub head: Point,
    pub score: u32,
}

/// Printed once the game is over.
#[derive(Clone, Debug, Serialize)]
pub struct GameSummary {
    pub variant: Variant,
    pub score: u32,
    pub steps: u64,
    pub length: usize,
}

pub struct Game {
    variant: Variant,
    field: Field,
    snake: Snake,
    direction: Direction,
    food: Point,
    score: u32,
    steps: u64,
    status: GameStatus,
    rng: StdRng,
}

impl Game {
    /// New game with an entropy-seeded generator.
    pub fn new(config: &GameConfig) -> Result<Game> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// New game whose food and coin flips are fully determined by `seed`.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Game> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, mut rng: StdRng) -> Result<Game> {
        config.validate()?;
        let field = config.field();
        let direction = config.start_direction();
        let snake = Snake::new(config.start_head(), config.initial_length, direction, field.block);
        let food = Food::place(&snake, &field, &mut rng)
            .ok_or_else(|| Error::InvalidConfig("no free cell for the first food".to_string()))?;
        Ok(Game {
            variant: config.variant,
            field,
            snake,
            direction,
            food: food.position,
            score: 0,
            steps: 0,
            status: GameStatus::Running,
            rng,
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Terminated
    }

    pub fn record(&self) -> TickRecord {
        TickRecord {
            step: self.steps,
            direction: self.direction,
            head: self.snake.head(),
            score: self.score,
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            variant: self.variant,
            score: self.score,
            steps: self.steps,
            length: self.snake.len(),
        }
    }

    /// Head off the field or on its own body.
    pub fn is_collision(&self) -> bool {
        collides(&self.field, &self.snake, self.snake.head())
    }

    /// Would a head at `p` collide with the field edge or the current body?
    pub fn is_collision_at(&self, p: Point) -> bool {
        collides(&self.field, &self.snake, p)
    }

    /// Replaces the food with a random free cell. `false` when the board is full.
    pub fn place_food(&mut self) -> bool {
        match Food::place(&self.snake, &self.field, &mut self.rng) {
            Some(food) => {
                self.food = food.position;
                true
            }
            None => false,
        }
    }

    /// Advances the game by one tick.
    ///
    /// `command` is the player's latched key, ignored by the autopilot.
    pub fn step(&mut self, command: Option<Direction>) -> StepOutcome {
        if self.is_over() {
            return self.outcome();
        }

        self.direction = self.next_direction(command);
        let head = self.snake.advance(self.direction, self.field.block);
        self.snake.push_head(head);
        self.steps += 1;

        if self.is_collision() {
            self.status = GameStatus::Terminated;
            info!("collision at {:?} after {} steps", head, self.steps);
            return self.outcome();
        }

        if head == self.food {
            self.score += 1;
            if !self.place_food() {
                self.status = GameStatus::Terminated;
                info!("board full with score {}", self.score);
            }
        } else {
            self.snake.pop_tail();
        }

        if log_enabled!(Level::Debug) {
            if let Ok(line) = serde_json::to_string(&self.record()) {
                debug!("tick {}", line);
            }
        }

        self.outcome()
    }

    fn next_direction(&mut self, command: Option<Direction>) -> Direction {
        match self.variant {
            Variant::Manual => game_input::steer(self.direction, command),
            Variant::Autopilot => {
                let field = &self.field;
                let snake = &self.snake;
                let block = field.block;
                autopilot::steer(&mut self.rng, snake.head(), self.direction, block, |d| {
                    collides(field, snake, snake.advance(d, block))
                })
            }
        }
    }

    fn outcome(&self) -> StepOutcome {
        StepOutcome {
            game_over: self.is_over(),
            score: self.score,
        }
    }
}

fn collides(field: &Field, snake: &Snake, p: Point) -> bool {
    !field.is_inside(p) || snake.hits_body(p)
}
