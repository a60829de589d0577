//! Event hook entry point.
//!
//! Reads one JSON event from stdin, and when it is an outgoing message with
//! speakable text under an enabled config, launches the `talkback` CLI
//! detached. Always exits 0: spoken playback is a best-effort enhancement
//! and no failure here is ever surfaced to the host runtime.

use std::process::ExitCode;
use talkback_app::hook::{self, HookEvent};
use talkback_app::logging;
use talkback_foundation::Paths;
use tokio::io::AsyncReadExt;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let paths = match Paths::from_env() {
        Ok(paths) => paths,
        Err(e) => {
            debug!("hook disabled: {e}");
            return ExitCode::SUCCESS;
        }
    };

    let mut input = String::new();
    if let Err(e) = tokio::io::stdin().read_to_string(&mut input).await {
        debug!("could not read event from stdin: {e}");
        return ExitCode::SUCCESS;
    }

    match serde_json::from_str::<HookEvent>(&input) {
        Ok(event) => {
            // The handle is deliberately dropped: the child survives this
            // process and plays on its own.
            let _ = hook::handle_event(&paths, &event).await;
        }
        Err(e) => debug!("unrecognized event payload: {e}"),
    }

    ExitCode::SUCCESS
}
