//! Grid snake: the per-tick game state, a coin-flip autopilot and a
//! `pixels`/`winit` front end shared by the two binaries.

pub mod autopilot;
pub mod border;
pub mod config;
pub mod error;
pub mod event_loop;
pub mod food;
pub mod font;
pub mod game;
pub mod game_input;
pub mod log;
pub mod render;
pub mod snake;
pub mod utils;

pub use config::{GameConfig, Variant};
pub use error::{Error, Result};
pub use game::{Game, GameStatus, StepOutcome, TickRecord};
pub use snake::Direction;
pub use utils::Point;

/// Shared entry point of both binaries.
pub fn play(config: GameConfig) -> Result<()> {
    crate::log::init(simplelog::LevelFilter::Info)?;
    config.validate()?;
    ::log::info!("config {}", serde_json::to_string(&config)?);
    let game = Game::new(&config)?;
    event_loop::run(config, game)
}
