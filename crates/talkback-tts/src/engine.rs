//! TTS engine abstraction

use crate::error::TtsResult;
use crate::temp::TempAudio;
use crate::types::{SynthesisOptions, VoiceInfo};
use async_trait::async_trait;

/// Core TTS engine interface.
///
/// Implementations drive a specific external synthesis tool and produce an
/// audio file per request. Engines are stateless between requests.
#[async_trait]
pub trait TtsEngine: Send + Sync {
    /// Engine name/identifier
    fn name(&self) -> &str;

    /// Whether the engine's binary can be launched on this system
    async fn is_available(&self) -> bool;

    /// Synthesize `text` into a temp audio file.
    ///
    /// The returned [`TempAudio`] owns the file and removes it on drop.
    async fn synthesize_to_file(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> TtsResult<TempAudio>;

    /// List the voices the engine offers
    async fn list_voices(&self) -> TtsResult<Vec<VoiceInfo>>;
}
