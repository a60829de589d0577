//! Hook configuration.
//!
//! Read fresh on every hook invocation so edits take effect without any
//! reload mechanism. A missing or unreadable file means "enabled, defaults".

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Per-user hook configuration, `$HOME/.talkback/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Master switch for spoken playback.
    pub enabled: bool,
    /// Voice identifier passed through to the synthesis engine.
    pub voice: Option<String>,
    /// Speech rate in signed percent form, e.g. `"+10%"`.
    pub rate: Option<String>,
    /// Volume in signed percent form, e.g. `"-25%"`.
    pub volume: Option<String>,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            voice: None,
            rate: None,
            volume: None,
        }
    }
}

impl HookConfig {
    /// Load from `path`. Missing file or malformed JSON falls back to
    /// defaults; the failure is only visible at debug level.
    pub async fn load(path: &Path) -> Self {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    debug!("Malformed config at {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                debug!("No config at {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
