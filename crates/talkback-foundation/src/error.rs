use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Home directory not set (HOME)")]
    NoHome,
}

#[derive(Error, Debug)]
pub enum SubprocessError {
    #[error("Failed to launch {command}: {message}")]
    Launch { command: String, message: String },

    #[error("{command} exited with status {status}: {stderr}")]
    NonZeroExit {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("{command} timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
