//! Error types for TTS functionality

use talkback_foundation::SubprocessError;
use thiserror::Error;

/// TTS error types
#[derive(Error, Debug)]
pub enum TtsError {
    /// Engine is not available or not installed
    #[error("TTS engine not available: {0}")]
    EngineNotAvailable(String),

    /// Invalid text input
    #[error("Invalid text input: {0}")]
    InvalidInput(String),

    /// Subprocess-level failure (bad voice name, engine exit, timeout)
    #[error("Subprocess error: {0}")]
    Subprocess(#[from] SubprocessError),
}

/// Result type for TTS operations
pub type TtsResult<T> = Result<T, TtsError>;
