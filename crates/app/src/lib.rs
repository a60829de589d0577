//! Talkback: spoken playback of agent messages.
//!
//! Two entry points share this crate: the `talkback` CLI, which speaks a
//! piece of text through `edge-tts` and `mpv`, and the `talkback-hook`
//! binary, which consumes a host runtime message event and launches the CLI
//! detached.

pub mod hook;
pub mod logging;
pub mod pipeline;
