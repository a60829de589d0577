//! Core types for text-to-speech functionality

use serde::{Deserialize, Serialize};

/// Options for one synthesis request.
///
/// All fields are pass-through overrides for the engine; `rate` and `volume`
/// use the engine's signed percent form (`"+0%"`, `"-25%"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Voice identifier, e.g. `"zh-CN-XiaoxiaoNeural"`.
    pub voice: Option<String>,
    /// Speech rate adjustment.
    pub rate: Option<String>,
    /// Volume adjustment.
    pub volume: Option<String>,
}

/// Voice information reported by an engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Unique voice identifier
    pub id: String,
    /// Language/locale code, e.g. `"en-US"`
    pub language: String,
    /// Gender as reported by the engine, if any
    pub gender: Option<String>,
}
