use grid_snake::{GameConfig, Result};

fn main() -> Result<()> {
    grid_snake::play(GameConfig::manual())
}
