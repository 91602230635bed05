use std::process::Command;
use std::time::Duration;

use crate::error::{TalkError, TalkResult};

use super::process::run_with_timeout;

/// Run a script through `osascript`, trimming stdout on success.
pub fn run_applescript(script: &str, timeout: Duration) -> TalkResult<String> {
    let output = run_with_timeout(
        Command::new("osascript").arg("-e").arg(script),
        timeout,
    )
    .map_err(|error| TalkError::Automation(format!("failed to execute osascript: {error}")))?;

    if output.success {
        Ok(output.stdout.trim().to_string())
    } else {
        Err(TalkError::Automation(output.stderr.trim().to_string()))
    }
}

/// Escape a value for interpolation into an AppleScript string literal.
pub fn applescript_escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
