//! Subprocess execution with strict timeouts.
//!
//! External tools (`edge-tts`, `mpv`) are run with structured argument
//! vectors, never through a shell, so message text needs no escaping. Every
//! child is spawned with `kill_on_drop(true)`: when a wait times out the
//! handle is dropped and the OS process is killed with it.

use crate::error::SubprocessError;
use std::ffi::OsStr;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Runs `cmd args...` to completion with a strict timeout.
///
/// Stdout is discarded, stderr is captured for the error message. Non-zero
/// exit, launch failure, and timeout are all distinct errors.
pub async fn run_with_timeout<S: AsRef<OsStr>>(
    cmd: &str,
    args: &[S],
    timeout: Duration,
) -> Result<(), SubprocessError> {
    debug!(command = cmd, ?timeout, "spawning subprocess");

    let child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| SubprocessError::Launch {
            command: cmd.to_string(),
            message: e.to_string(),
        })?;

    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => {
            if output.status.success() {
                Ok(())
            } else {
                Err(SubprocessError::NonZeroExit {
                    command: cmd.to_string(),
                    status: output.status.to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                })
            }
        }
        Ok(Err(e)) => Err(SubprocessError::Io(e)),
        Err(_) => Err(SubprocessError::Timeout {
            command: cmd.to_string(),
            timeout,
        }),
    }
}

/// Runs `cmd args...` and captures stdout, with a strict timeout.
pub async fn run_capture_with_timeout<S: AsRef<OsStr>>(
    cmd: &str,
    args: &[S],
    timeout: Duration,
) -> Result<String, SubprocessError> {
    let child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| SubprocessError::Launch {
            command: cmd.to_string(),
            message: e.to_string(),
        })?;

    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).into_owned())
            } else {
                Err(SubprocessError::NonZeroExit {
                    command: cmd.to_string(),
                    status: output.status.to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                })
            }
        }
        Ok(Err(e)) => Err(SubprocessError::Io(e)),
        Err(_) => Err(SubprocessError::Timeout {
            command: cmd.to_string(),
            timeout,
        }),
    }
}

/// Probe whether `cmd` can be launched at all. Used for availability checks;
/// never panics, never errors.
pub async fn probe_command(cmd: &str, arg: &str) -> bool {
    Command::new(cmd)
        .arg(arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_a_launch_error() {
        let err = run_with_timeout(
            "talkback-test-no-such-binary",
            &["--version"],
            Duration::from_secs(1),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SubprocessError::Launch { .. }));
    }

    #[tokio::test]
    async fn probe_reports_missing_binary() {
        assert!(!probe_command("talkback-test-no-such-binary", "--version").await);
    }

    #[tokio::test]
    async fn capture_returns_stdout() {
        let out = run_capture_with_timeout("echo", &["hello"], Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[tokio::test]
    async fn hung_child_times_out() {
        let err = run_with_timeout("sleep", &["30"], Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, SubprocessError::Timeout { .. }));
    }
}
