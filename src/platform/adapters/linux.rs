use std::process::Command;

use super::{Platform, ENUMERATION_TIMEOUT};
use crate::error::{TalkError, TalkResult};
use crate::platform::process::{run_with_timeout, spawn_detached};
use crate::platform::types::{AppAction, LaunchOutcome, ProcessInfo};
use crate::types::ActionResult;

#[derive(Debug, Default)]
pub struct LinuxAdapter;

impl LinuxAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for LinuxAdapter {
    fn id(&self) -> &str {
        "linux"
    }

    fn launch(&self, token: &str) -> TalkResult<LaunchOutcome> {
        // GUI launchers do not exit when the app does, so spawn detached and
        // keep the pid instead of waiting on an exit status.
        let strategies: [Vec<&str>; 4] = [
            vec![token],
            vec!["xdg-open", token],
            vec!["gnome-open", token],
            vec!["kde-open", token],
        ];

        for argv in &strategies {
            let mut command = Command::new(argv[0]);
            command.args(&argv[1..]);
            match spawn_detached(&mut command) {
                Ok(pid) => {
                    return Ok(LaunchOutcome {
                        pid: Some(pid),
                        command: argv.join(" "),
                    });
                }
                Err(error) => {
                    tracing::debug!("launch strategy {:?} unavailable: {error}", argv[0]);
                }
            }
        }

        Err(TalkError::Launch {
            app: token.to_string(),
            reason: "all Linux launch strategies failed".to_string(),
        })
    }

    fn list_processes(&self) -> Vec<ProcessInfo> {
        let output = match run_with_timeout(Command::new("ps").arg("aux"), ENUMERATION_TIMEOUT) {
            Ok(output) if output.success => output,
            Ok(output) => {
                tracing::warn!("ps aux failed: {}", output.stderr.trim());
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
            .filter_map(|line| {
                let columns: Vec<&str> = line.split_whitespace().collect();
                if columns.len() >= 11 {
                    Some(columns[10])
                } else {
                    None
                }
            })
            .filter(|name| !name.starts_with('[')) // kernel threads
            .map(|name| ProcessInfo {
                name: name.to_string(),
                platform_tag: "Linux".to_string(),
            })
            .collect()
    }

    // X11/Wayland window control is out of scope; actions are acknowledged
    // without being performed.
    fn control(&self, app_name: &str, action: AppAction) -> ActionResult {
        ActionResult::ok(format!("Action {} on {app_name} (Linux)", action.name()))
            .with_detail(serde_json::json!({ "action": action.name() }))
    }
}
