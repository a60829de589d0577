//! Filesystem locations resolved once at startup.
//!
//! Everything that depends on the environment is captured here and passed by
//! parameter. No module-level path globals.

use crate::error::AppError;
use std::path::PathBuf;

pub const CONFIG_DIR_NAME: &str = ".talkback";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Resolved filesystem locations for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// JSON hook configuration, `$HOME/.talkback/config.json`.
    pub config_file: PathBuf,
    /// The `talkback` CLI binary the hook launches.
    pub cli_binary: PathBuf,
    /// Directory for generated audio files, normally the OS temp dir.
    pub temp_dir: PathBuf,
}

impl Paths {
    /// Resolve from the process environment.
    ///
    /// The CLI binary is looked for next to the current executable so an
    /// installed hook finds its sibling; otherwise `talkback` is left to
    /// `PATH` lookup at spawn time.
    pub fn from_env() -> Result<Self, AppError> {
        let home = std::env::var_os("HOME").ok_or(AppError::NoHome)?;
        let config_file = PathBuf::from(home)
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME);

        let cli_binary = std::env::current_exe()
            .ok()
            .and_then(|exe| {
                let sibling = exe.with_file_name("talkback");
                sibling.is_file().then_some(sibling)
            })
            .unwrap_or_else(|| PathBuf::from("talkback"));

        Ok(Self {
            config_file,
            cli_binary,
            temp_dir: std::env::temp_dir(),
        })
    }
}
