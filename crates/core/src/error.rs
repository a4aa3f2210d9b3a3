//! Engine error taxonomy.
//!
//! Every error is recoverable: callers either ignore it (a move on a finished
//! game) or fix their input and try again (bad config, unknown direction).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Construction-time failure (board too small, malformed position).
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// A move was attempted after the game reached its terminal state.
    #[error("game is already over")]
    GameAlreadyOver,
    /// An input adapter was handed something that is not one of the four directions.
    #[error("unsupported direction: {0:?}")]
    UnsupportedDirection(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
