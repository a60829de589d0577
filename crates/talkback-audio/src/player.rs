use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use talkback_foundation::subprocess::{probe_command, run_with_timeout};
use talkback_foundation::SubprocessError;
use thiserror::Error;
use tracing::debug;

const MPV_COMMAND: &str = "mpv";
const PLAYBACK_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Playback failed: {0}")]
    Subprocess(#[from] SubprocessError),
}

/// Something that can play an audio file to the local output.
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Whether the sink's backend can be launched on this system
    async fn is_available(&self) -> bool;

    /// Play `file` once and wait for playback to finish
    async fn play(&self, file: &Path) -> Result<(), PlaybackError>;
}

/// Plays audio files through `mpv`.
#[derive(Debug, Default)]
pub struct Player;

impl Player {
    pub fn new() -> Self {
        Self
    }

    fn build_args(file: &Path) -> Vec<String> {
        vec![
            file.display().to_string(),
            "--no-video".to_string(),
            "--loop=no".to_string(),
        ]
    }
}

#[async_trait]
impl AudioSink for Player {
    async fn is_available(&self) -> bool {
        probe_command(MPV_COMMAND, "--version").await
    }

    async fn play(&self, file: &Path) -> Result<(), PlaybackError> {
        debug!("playing {}", file.display());
        run_with_timeout(MPV_COMMAND, &Self::build_args(file), PLAYBACK_TIMEOUT).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_play_once_without_video() {
        let args = Player::build_args(Path::new("/tmp/talkback-1-2-3.mp3"));
        assert_eq!(args, vec!["/tmp/talkback-1-2-3.mp3", "--no-video", "--loop=no"]);
    }

    #[tokio::test]
    async fn availability_probe_does_not_panic() {
        let _available = AudioSink::is_available(&Player::new()).await;
    }
}
