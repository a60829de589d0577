//! Temp audio file lifecycle.
//!
//! Names combine millisecond timestamp, pid, and a process-wide counter, so
//! two requests can never collide even within the same millisecond. The
//! value owns the path: dropping it removes the file on every exit path,
//! and removal errors are swallowed.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

static TEMP_SEQ: AtomicU64 = AtomicU64::new(1);

/// A uniquely named audio file in `dir`, deleted on drop.
#[derive(Debug)]
pub struct TempAudio {
    path: PathBuf,
}

impl TempAudio {
    /// Reserve a fresh `.mp3` path under `dir`. The file itself is created
    /// by the synthesis engine writing to it.
    pub fn new_in(dir: &Path) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let seq = TEMP_SEQ.fetch_add(1, Ordering::SeqCst);
        let path = dir.join(format!(
            "talkback-{millis}-{}-{seq}.mp3",
            std::process::id()
        ));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudio {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // Best-effort: the engine may never have produced the file.
            debug!("temp cleanup skipped for {}: {e}", self.path.display());
        }
    }
}
