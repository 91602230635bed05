use std::process::Command;

use super::{Platform, AUTOMATION_TIMEOUT, COMMAND_TIMEOUT, ENUMERATION_TIMEOUT};
use crate::error::{TalkError, TalkResult};
use crate::platform::applescript::{applescript_escape, run_applescript};
use crate::platform::process::run_with_timeout;
use crate::platform::types::{AppAction, LaunchOutcome, ProcessInfo};
use crate::types::ActionResult;

#[derive(Debug, Default)]
pub struct MacosAdapter;

impl MacosAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for MacosAdapter {
    fn id(&self) -> &str {
        "macos"
    }

    fn launch(&self, token: &str) -> TalkResult<LaunchOutcome> {
        let activate = format!(
            "tell application \"{}\" to activate",
            applescript_escape(token)
        );
        let strategies: [Vec<&str>; 3] = [
            vec!["open", "-a", token],
            vec!["open", token],
            vec!["osascript", "-e", &activate],
        ];

        for argv in &strategies {
            let mut command = Command::new(argv[0]);
            command.args(&argv[1..]);
            match run_with_timeout(&mut command, COMMAND_TIMEOUT) {
                Ok(output) if output.success => {
                    return Ok(LaunchOutcome {
                        pid: None,
                        command: argv.join(" "),
                    });
                }
                Ok(output) => {
                    tracing::debug!(
                        "launch strategy {:?} rejected {token}: {}",
                        argv[0],
                        output.stderr.trim()
                    );
                }
                Err(error) => {
                    tracing::debug!("launch strategy {:?} unavailable: {error}", argv[0]);
                }
            }
        }

        Err(TalkError::Launch {
            app: token.to_string(),
            reason: "all macOS launch strategies failed".to_string(),
        })
    }

    fn list_processes(&self) -> Vec<ProcessInfo> {
        let script = "tell application \"System Events\" to get name of every process";
        match run_applescript(script, ENUMERATION_TIMEOUT) {
            Ok(stdout) => stdout
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| ProcessInfo {
                    name: name.to_string(),
                    platform_tag: "macOS".to_string(),
                })
                .collect(),
            Err(error) => {
                tracing::warn!("process enumeration failed: {error}");
                Vec::new()
            }
        }
    }

    fn control(&self, app_name: &str, action: AppAction) -> ActionResult {
        let app = applescript_escape(app_name);
        let script = match action {
            AppAction::Activate => format!("tell application \"{app}\" to activate"),
            AppAction::Close => format!("tell application \"{app}\" to close"),
            AppAction::Quit => format!("tell application \"{app}\" to quit"),
            AppAction::Minimize => {
                format!("tell application \"{app}\" to set minimized of window 1 to true")
            }
            AppAction::Maximize => {
                format!("tell application \"{app}\" to set zoomed of window 1 to true")
            }
        };

        match run_applescript(&script, COMMAND_TIMEOUT) {
            Ok(stdout) => ActionResult::ok(format!("Performed {} on {app_name}", action.name()))
                .with_detail(serde_json::json!({
                    "action": action.name(),
                    "stdout": stdout,
                })),
            Err(error) => ActionResult::failure(format!(
                "Failed to {} {app_name}: {error}",
                action.name()
            ))
            .with_detail(serde_json::json!({ "action": action.name() })),
        }
    }

    fn run_script(&self, script: &str) -> TalkResult<String> {
        run_applescript(script, AUTOMATION_TIMEOUT)
    }
}
