//! Event hook handler.
//!
//! Invoked for every host event; anything that is not an outgoing message
//! with speakable text under an enabled config is a silent no-op. The
//! matching path launches the `talkback` CLI detached: the handler returns
//! before synthesis or playback happen, so the host is never stalled by
//! audio. Failures are logged and never surfaced to the host.

pub mod event;

pub use event::{EventContext, HookEvent};

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use talkback_foundation::{spawn_detached, HookConfig, Paths, SubprocessError};
use talkback_tts::sanitize_for_speech;
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::debug;

/// Outer bound on one detached synthesize-and-play run.
const LAUNCH_TIMEOUT: Duration = Duration::from_secs(90);

/// Argument vector for the CLI invocation: sanitized text first, then any
/// configured overrides as separate argv entries.
fn build_cli_args(text: &str, config: &HookConfig) -> Vec<String> {
    let mut args = vec![text.to_string()];
    if let Some(voice) = &config.voice {
        args.push("--voice".to_string());
        args.push(voice.clone());
    }
    if let Some(rate) = &config.rate {
        args.push("--rate".to_string());
        args.push(rate.clone());
    }
    if let Some(volume) = &config.volume {
        args.push("--volume".to_string());
        args.push(volume.clone());
    }
    args
}

/// Process one event. Returns the supervision handle when a playback run
/// was launched, `None` for every no-op path.
pub async fn handle_event(paths: &Paths, event: &HookEvent) -> Option<JoinHandle<()>> {
    if !event.is_outgoing_message() {
        return None;
    }
    let raw = event.message_text()?;

    let Some(text) = sanitize_for_speech(raw) else {
        debug!("nothing speakable after sanitizing, skipping");
        return None;
    };

    let config = HookConfig::load(&paths.config_file).await;
    if !config.enabled {
        return None;
    }

    let args = build_cli_args(&text, &config);
    debug!("launching playback for \"{}\"", truncate(&text, 50));
    Some(launch_cli(paths.cli_binary.clone(), args))
}

/// Fire-and-forget launch of the CLI.
///
/// The OS child is spawned here, synchronously, so it exists by the time
/// the handler returns even if the caller's runtime shuts down right after.
/// It is spawned without `kill_on_drop` and keeps playing if the hook
/// process exits first; while the handler's runtime is alive, a detached
/// task supervises it, kills it after [`LAUNCH_TIMEOUT`], and funnels
/// failures to the log.
fn launch_cli(binary: PathBuf, args: Vec<String>) -> JoinHandle<()> {
    let spawned = Command::new(&binary)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    spawn_detached("talkback playback", async move {
        let mut child = spawned.map_err(|e| SubprocessError::Launch {
            command: binary.display().to_string(),
            message: e.to_string(),
        })?;

        match tokio::time::timeout(LAUNCH_TIMEOUT, child.wait()).await {
            Ok(Ok(status)) if status.success() => Ok(()),
            Ok(Ok(status)) => Err(SubprocessError::NonZeroExit {
                command: binary.display().to_string(),
                status: status.to_string(),
                stderr: String::new(),
            }),
            Ok(Err(e)) => Err(SubprocessError::Io(e)),
            Err(_) => {
                let _ = child.kill().await;
                Err(SubprocessError::Timeout {
                    command: binary.display().to_string(),
                    timeout: LAUNCH_TIMEOUT,
                })
            }
        }
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
