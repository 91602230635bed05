//! Timeout-bounded execution of external processes.
//!
//! Every OS call in the adapters goes through here so that a hung tool
//! degrades to a failure instead of blocking the session forever. A timeout
//! is reported the same way as a non-zero exit; no retry is attempted.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Captured outcome of a bounded process run.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub success: bool,
    pub timed_out: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run a command to completion, killing it after `timeout`.
///
/// Returns `Err` only when the process cannot be spawned at all.
pub fn run_with_timeout(command: &mut Command, timeout: Duration) -> std::io::Result<ProcessOutput> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait()? {
            Some(status) => {
                return Ok(ProcessOutput {
                    success: status.success(),
                    timed_out: false,
                    stdout: join(stdout),
                    stderr: join(stderr),
                });
            }
            None if Instant::now() >= deadline => {
                kill_quietly(&mut child);
                return Ok(ProcessOutput {
                    success: false,
                    timed_out: true,
                    stdout: join(stdout),
                    stderr: format!("timed out after {}s", timeout.as_secs()),
                });
            }
            None => std::thread::sleep(POLL_INTERVAL),
        }
    }
}

/// Spawn a command detached from our stdio and return its pid without waiting.
pub fn spawn_detached(command: &mut Command) -> std::io::Result<u32> {
    let child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(child.id())
}

fn drain<R: Read + Send + 'static>(reader: Option<R>) -> std::thread::JoinHandle<String> {
    std::thread::spawn(move || {
        let mut buffer = String::new();
        if let Some(mut reader) = reader {
            let _ = reader.read_to_string(&mut buffer);
        }
        buffer
    })
}

fn join(handle: std::thread::JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}

fn kill_quietly(child: &mut Child) {
    if let Err(error) = child.kill() {
        tracing::warn!("failed to kill timed-out process: {error}");
    }
    let _ = child.wait();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn completed_process_is_captured() {
        let output = run_with_timeout(
            Command::new("sh").arg("-c").arg("echo hello"),
            Duration::from_secs(5),
        )
        .expect("spawn sh");
        assert!(output.success);
        assert!(!output.timed_out);
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_a_failure() {
        let output = run_with_timeout(
            Command::new("sh").arg("-c").arg("exit 3"),
            Duration::from_secs(5),
        )
        .expect("spawn sh");
        assert!(!output.success);
        assert!(!output.timed_out);
    }

    #[cfg(unix)]
    #[test]
    fn timeout_kills_and_reports() {
        let output = run_with_timeout(
            Command::new("sleep").arg("30"),
            Duration::from_millis(100),
        )
        .expect("spawn sleep");
        assert!(!output.success);
        assert!(output.timed_out);
        assert!(output.stderr.contains("timed out"));
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let result = run_with_timeout(
            &mut Command::new("definitely-not-a-real-binary"),
            Duration::from_secs(1),
        );
        assert!(result.is_err());
    }
}
