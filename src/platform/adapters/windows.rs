use std::process::Command;

use super::{Platform, COMMAND_TIMEOUT, ENUMERATION_TIMEOUT};
use crate::error::{TalkError, TalkResult};
use crate::platform::process::run_with_timeout;
use crate::platform::types::{AppAction, LaunchOutcome, ProcessInfo};
use crate::types::ActionResult;

#[derive(Debug, Default)]
pub struct WindowsAdapter;

impl WindowsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for WindowsAdapter {
    fn id(&self) -> &str {
        "windows"
    }

    fn launch(&self, token: &str) -> TalkResult<LaunchOutcome> {
        // `start` is a cmd builtin; the empty string is the window title slot.
        let output = run_with_timeout(
            Command::new("cmd").args(["/C", "start", "", token]),
            COMMAND_TIMEOUT,
        )
        .map_err(|error| TalkError::Launch {
            app: token.to_string(),
            reason: format!("failed to run start: {error}"),
        })?;

        if output.success {
            Ok(LaunchOutcome {
                pid: None,
                command: format!("cmd /C start {token}"),
            })
        } else {
            Err(TalkError::Launch {
                app: token.to_string(),
                reason: output.stderr.trim().to_string(),
            })
        }
    }

    fn list_processes(&self) -> Vec<ProcessInfo> {
        let output = match run_with_timeout(
            Command::new("tasklist").args(["/fo", "csv"]),
            ENUMERATION_TIMEOUT,
        ) {
            Ok(output) if output.success => output,
            Ok(output) => {
                tracing::warn!("tasklist failed: {}", output.stderr.trim());
                return Vec::new();
            }
            Err(error) => {
                tracing::warn!("process enumeration failed: {error}");
                return Vec::new();
            }
        };

        output
            .stdout
            .lines()
            .skip(1) // header row
            .filter_map(|line| line.split(',').next())
            .map(|field| field.trim().trim_matches('"'))
            .filter(|name| !name.is_empty())
            .map(|name| ProcessInfo {
                name: name.to_string(),
                platform_tag: "Windows".to_string(),
            })
            .collect()
    }

    // Real window control on Windows needs an automation stack this adapter
    // does not carry; actions are acknowledged without being performed.
    fn control(&self, app_name: &str, action: AppAction) -> ActionResult {
        ActionResult::ok(format!(
            "Action {} on {app_name} (Windows)",
            action.name()
        ))
        .with_detail(serde_json::json!({ "action": action.name() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_acknowledges_without_automation() {
        let result = WindowsAdapter::new().control("Notepad", AppAction::Minimize);
        assert!(result.success);
        assert!(result.message.contains("minimize"));
        assert!(result.message.contains("Windows"));
    }

    #[test]
    fn automation_scripts_are_unsupported() {
        let error = WindowsAdapter::new()
            .run_script("tell application \"Messages\" to activate")
            .expect_err("windows has no scripting hook");
        assert!(matches!(error, TalkError::Automation(_)));
    }
}
