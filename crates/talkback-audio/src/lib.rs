//! Audio playback for Talkback
//!
//! Plays a synthesized audio file through the `mpv` command-line player,
//! treated as an opaque subprocess dependency. Playback is play-once with
//! video disabled, bounded by a hard timeout.

pub mod player;

pub use player::{AudioSink, PlaybackError, Player};
