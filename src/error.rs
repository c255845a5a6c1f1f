use thiserror::Error;

/// Errors raised while setting up or running a game.
#[derive(Debug, Error)]
pub enum SnakeError {
    /// Two positions do not share an edge, so no single step joins them.
    #[error("positions are not adjacent (dx = {dx}, dy = {dy})")]
    NotAdjacent { dx: i32, dy: i32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}

impl From<SnakeError> for ggez::GameError {
    fn from(err: SnakeError) -> Self {
        ggez::GameError::CustomError(err.to_string())
    }
}
