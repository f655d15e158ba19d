use simplelog::{ColorChoice, Config, ConfigBuilder, LevelFilter, SimpleLogger, TermLogger, TerminalMode};

use crate::error::Result;

fn config() -> Config {
    ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build()
}

/// Installs the global logger. Falls back to plain stdout when no terminal
/// is attached.
pub fn init(level: LevelFilter) -> Result<()> {
    if TermLogger::init(level, config(), TerminalMode::Mixed, ColorChoice::Auto).is_ok() {
        return Ok(());
    }
    SimpleLogger::init(level, config())?;
    Ok(())
}
