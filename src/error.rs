use thiserror::Error;

/// Startup and rendering failures. Losing the game is not an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid game config: {0}")]
    InvalidConfig(String),

    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("could not serialize: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
