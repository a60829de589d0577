//! Fire-and-forget task dispatch.
//!
//! The hook must return to the host runtime before playback finishes, so
//! the launch is handed to a detached task. Nobody awaits the handle; any
//! failure ends up in the tracing sink and nowhere else.

use std::future::Future;
use tokio::task::JoinHandle;
use tracing::warn;

/// Spawns `fut` detached. The returned handle may be awaited by tests but
/// callers normally drop it.
pub fn spawn_detached<F, E>(context: &'static str, fut: F) -> JoinHandle<()>
where
    F: Future<Output = Result<(), E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = fut.await {
            warn!("{context} failed: {e}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failures_are_swallowed() {
        let handle = spawn_detached("test task", async {
            Err::<(), _>("deliberate failure")
        });
        // The task itself must complete cleanly even though the future errored.
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn success_completes() {
        let handle = spawn_detached("test task", async { Ok::<_, String>(()) });
        handle.await.unwrap();
    }
}
