//! Error types for the engine connection layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to connect to Unreal Engine at {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    #[error("Engine socket error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid response from Unreal Engine: {0}")]
    InvalidResponse(String),

    #[error("Invalid engine configuration: {0}")]
    Config(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
