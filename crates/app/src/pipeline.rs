//! Synthesize-then-play pipeline.

use anyhow::Context;
use talkback_audio::AudioSink;
use talkback_tts::{SynthesisOptions, TtsEngine};
use tracing::info;

/// Speak `text`: synthesize to a temp file, play it, clean up.
///
/// The temp file is owned by a guard and removed on every exit path,
/// including synthesis and playback failures.
pub async fn speak(
    engine: &dyn TtsEngine,
    sink: &dyn AudioSink,
    text: &str,
    options: &SynthesisOptions,
) -> anyhow::Result<()> {
    let preview: String = text.chars().take(30).collect();
    info!("speaking: \"{preview}...\"");

    let audio = engine
        .synthesize_to_file(text, options)
        .await
        .context("synthesis failed")?;
    sink.play(audio.path()).await.context("playback failed")?;

    info!("playback complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use talkback_audio::PlaybackError;
    use talkback_foundation::SubprocessError;
    use talkback_tts::{TempAudio, TtsError, TtsResult, VoiceInfo};

    /// Writes a real file per request and counts how many it produced.
    struct StubEngine {
        dir: PathBuf,
        created: AtomicUsize,
    }

    impl StubEngine {
        fn new() -> Self {
            Self {
                dir: std::env::temp_dir(),
                created: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TtsEngine for StubEngine {
        fn name(&self) -> &str {
            "stub"
        }

        async fn is_available(&self) -> bool {
            true
        }

        async fn synthesize_to_file(
            &self,
            _text: &str,
            _options: &SynthesisOptions,
        ) -> TtsResult<TempAudio> {
            let audio = TempAudio::new_in(&self.dir);
            std::fs::write(audio.path(), b"audio").unwrap();
            self.created.fetch_add(1, Ordering::SeqCst);
            Ok(audio)
        }

        async fn list_voices(&self) -> TtsResult<Vec<VoiceInfo>> {
            Ok(Vec::new())
        }
    }

    /// Records the path it was asked to play; optionally fails.
    struct RecordingSink {
        played: Mutex<Option<PathBuf>>,
        fail: bool,
    }

    impl RecordingSink {
        fn new(fail: bool) -> Self {
            Self {
                played: Mutex::new(None),
                fail,
            }
        }

        fn played_path(&self) -> PathBuf {
            self.played.lock().unwrap().clone().expect("nothing played")
        }
    }

    #[async_trait]
    impl AudioSink for RecordingSink {
        async fn is_available(&self) -> bool {
            true
        }

        async fn play(&self, file: &Path) -> Result<(), PlaybackError> {
            assert!(file.exists(), "audio file must exist during playback");
            *self.played.lock().unwrap() = Some(file.to_path_buf());
            if self.fail {
                Err(PlaybackError::Subprocess(SubprocessError::Launch {
                    command: "stub".to_string(),
                    message: "deliberate failure".to_string(),
                }))
            } else {
                Ok(())
            }
        }
    }

    struct FailingEngine;

    #[async_trait]
    impl TtsEngine for FailingEngine {
        fn name(&self) -> &str {
            "failing"
        }

        async fn is_available(&self) -> bool {
            false
        }

        async fn synthesize_to_file(
            &self,
            _text: &str,
            _options: &SynthesisOptions,
        ) -> TtsResult<TempAudio> {
            Err(TtsError::EngineNotAvailable("not installed".to_string()))
        }

        async fn list_voices(&self) -> TtsResult<Vec<VoiceInfo>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn round_trip_creates_one_file_and_removes_it() {
        let engine = StubEngine::new();
        let sink = RecordingSink::new(false);
        speak(&engine, &sink, "hello", &SynthesisOptions::default())
            .await
            .unwrap();
        assert_eq!(engine.created.load(Ordering::SeqCst), 1);
        assert!(!sink.played_path().exists());
    }

    #[tokio::test]
    async fn playback_failure_still_removes_the_file() {
        let engine = StubEngine::new();
        let sink = RecordingSink::new(true);
        let result = speak(&engine, &sink, "hello", &SynthesisOptions::default()).await;
        assert!(result.is_err());
        assert_eq!(engine.created.load(Ordering::SeqCst), 1);
        assert!(!sink.played_path().exists());
    }

    #[tokio::test]
    async fn synthesis_failure_propagates() {
        let sink = RecordingSink::new(false);
        let result = speak(&FailingEngine, &sink, "hello", &SynthesisOptions::default()).await;
        assert!(result.is_err());
        assert!(sink.played.lock().unwrap().is_none());
    }
}
