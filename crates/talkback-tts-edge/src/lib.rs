//! edge-tts engine implementation for Talkback

use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::time::Duration;
use talkback_foundation::subprocess::{probe_command, run_capture_with_timeout, run_with_timeout};
use talkback_tts::{SynthesisOptions, TempAudio, TtsEngine, TtsError, TtsResult, VoiceInfo};
use tracing::{debug, error};


const EDGE_TTS_COMMAND: &str = "edge-tts";
const DEFAULT_VOICE: &str = "zh-CN-XiaoxiaoNeural";
const DEFAULT_RATE: &str = "+0%";
const DEFAULT_VOLUME: &str = "+0%";

const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(30);
const VOICE_LIST_TIMEOUT: Duration = Duration::from_secs(15);

/// TTS engine backed by the `edge-tts` command-line tool.
pub struct EdgeTtsEngine {
    temp_dir: PathBuf,
}

impl EdgeTtsEngine {
    pub fn new(temp_dir: &Path) -> Self {
        Self {
            temp_dir: temp_dir.to_path_buf(),
        }
    }

    /// Build the edge-tts argument vector for one request. Text goes in as
    /// a single argv entry, so no escaping is involved.
    fn build_args(text: &str, options: &SynthesisOptions, output: &Path) -> Vec<String> {
        let voice = options.voice.as_deref().unwrap_or(DEFAULT_VOICE);
        let rate = options.rate.as_deref().unwrap_or(DEFAULT_RATE);
        let volume = options.volume.as_deref().unwrap_or(DEFAULT_VOLUME);

        vec![
            "--voice".to_string(),
            voice.to_string(),
            "--rate".to_string(),
            rate.to_string(),
            "--volume".to_string(),
            volume.to_string(),
            "--text".to_string(),
            text.to_string(),
            "--write-media".to_string(),
            output.display().to_string(),
        ]
    }

    /// Parse `edge-tts --list-voices` output.
    ///
    /// Format is a header line followed by rows like
    /// `zh-CN-XiaoxiaoNeural    Female    News, Novel    Warm`.
    fn parse_voice_list(output: &str) -> Vec<VoiceInfo> {
        let row = Regex::new(r"^\s*([A-Za-z]{2,3}(?:-[A-Za-z0-9]+)+)\s+(Female|Male)")
            .expect("static regex");

        let mut voices = Vec::new();
        for line in output.lines() {
            if let Some(captures) = row.captures(line) {
                let id = captures[1].to_string();
                // Locale is the leading `xx-XX` portion of the voice id.
                let language = id.splitn(3, '-').take(2).collect::<Vec<_>>().join("-");
                voices.push(VoiceInfo {
                    id,
                    language,
                    gender: Some(captures[2].to_string()),
                });
            }
        }
        voices
    }
}

#[async_trait]
impl TtsEngine for EdgeTtsEngine {
    fn name(&self) -> &str {
        "edge-tts"
    }

    async fn is_available(&self) -> bool {
        probe_command(EDGE_TTS_COMMAND, "--help").await
    }

    async fn synthesize_to_file(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> TtsResult<TempAudio> {
        if text.trim().is_empty() {
            return Err(TtsError::InvalidInput("empty text".to_string()));
        }

        let audio = TempAudio::new_in(&self.temp_dir);
        let args = Self::build_args(text, options, audio.path());
        debug!("running edge-tts synthesis to {}", audio.path().display());

        match run_with_timeout(EDGE_TTS_COMMAND, &args, SYNTHESIS_TIMEOUT).await {
            Ok(()) => Ok(audio),
            Err(e) => {
                error!("edge-tts synthesis failed: {e}");
                // `audio` drops here and removes any partial output.
                Err(TtsError::Subprocess(e))
            }
        }
    }

    async fn list_voices(&self) -> TtsResult<Vec<VoiceInfo>> {
        let output =
            run_capture_with_timeout(EDGE_TTS_COMMAND, &["--list-voices"], VOICE_LIST_TIMEOUT)
                .await
                .map_err(|e| TtsError::EngineNotAvailable(e.to_string()))?;
        Ok(Self::parse_voice_list(&output))
    }
}
