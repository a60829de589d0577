//! Text-to-speech abstraction layer for Talkback
//!
//! Foundational types and traits for speaking text through an external
//! synthesis engine: the engine trait, per-request options, voice metadata,
//! text sanitization, and the temp audio file lifecycle.

pub mod engine;
pub mod error;
pub mod temp;
pub mod text;
pub mod types;

pub use engine::TtsEngine;
pub use error::{TtsError, TtsResult};
pub use temp::TempAudio;
pub use text::{sanitize_for_speech, MAX_SPEAK_CHARS};
pub use types::{SynthesisOptions, VoiceInfo};
