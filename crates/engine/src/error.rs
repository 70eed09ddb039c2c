use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("game engine is no longer running")]
    Closed,
    #[error("invalid engine configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("game worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
