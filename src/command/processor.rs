//! Maps parsed intents onto adapter calls and formats the response.
//!
//! Every branch converts adapter-level failures into a formatted string; no
//! error crosses this boundary back to the caller.

use std::time::{Duration, Instant};

use chrono::Local;

use super::types::Intent;
use crate::applications::registry::Catalog;
use crate::applications::Messenger;
use crate::config::TaskStore;
use crate::error::TalkResult;
use crate::platform::{Desktop, TrackedApp};

const LIST_LIMIT: usize = 10;

pub struct Dispatcher {
    desktop: Desktop,
    catalog: Catalog,
    messenger: Messenger,
    tasks: Box<dyn TaskStore>,
    settle_delay: Duration,
    started_at: Instant,
}

impl Dispatcher {
    pub fn new(
        desktop: Desktop,
        catalog: Catalog,
        messenger: Messenger,
        tasks: Box<dyn TaskStore>,
        settle_delay: Duration,
    ) -> Self {
        Self {
            desktop,
            catalog,
            messenger,
            tasks,
            settle_delay,
            started_at: Instant::now(),
        }
    }

    /// Execute one intent and render the single response line.
    pub fn dispatch(&mut self, intent: Intent) -> String {
        match intent {
            Intent::Echo { reply } => reply,
            Intent::TimeQuery => format!(
                "Current time: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            ),
            Intent::StatusQuery => format!(
                "Status: Running, uptime: {:.2} seconds",
                self.started_at.elapsed().as_secs_f64()
            ),
            Intent::TaskQuery => match self.tasks.task_description() {
                Some(description) => format!("Your current task: {description}"),
                None => {
                    "No task description set. Run 'apptalk --task <description>' to set one."
                        .to_string()
                }
            },
            Intent::TaskClear => match self.tasks.clear_task_description() {
                Ok(()) => "✅ Task cleared. You can set a new one anytime.".to_string(),
                Err(error) => format!("❌ Failed to clear task: {error}"),
            },
            Intent::OpenApp { app_name } => match self.open(&app_name) {
                Ok(_) => format!("✅ Successfully opened {app_name}"),
                Err(error) => format!("❌ Failed to open {app_name}: {error}"),
            },
            Intent::OpenAndMessage {
                app_name,
                recipient,
                message_text,
            } => self.open_and_message(&app_name, &recipient, &message_text),
            Intent::OpenAndAction { app_name, action } => match self.open(&app_name) {
                // Follow-on actions are reported, not executed.
                Ok(_) => format!("✅ Opened {app_name}. Action '{action}' would be executed here."),
                Err(error) => format!("❌ Failed to open {app_name}: {error}"),
            },
            Intent::ListApps => self.list_apps(),
            Intent::ListRunningApps => self.list_running_apps(),
            Intent::CloseApp { app_name } => {
                let result = self.desktop.close_by_name(&app_name);
                if result.success {
                    format!("✅ {}", result.message)
                } else {
                    format!("❌ Failed to close {app_name}: {}", result.message)
                }
            }
        }
    }

    fn open(&mut self, app_name: &str) -> TalkResult<TrackedApp> {
        let token = self.catalog.launch_token(app_name);
        self.desktop.open_application(app_name, &token)
    }

    /// Open, wait for the UI to settle, then attempt the message. The three
    /// outcomes (full success, opened-but-unsent, open failure) each render
    /// their own template.
    fn open_and_message(&mut self, app_name: &str, recipient: &str, message_text: &str) -> String {
        if let Err(error) = self.open(app_name) {
            return format!("❌ Failed to open {app_name}: {error}");
        }

        // Blocking settle delay, not a synchronization primitive.
        std::thread::sleep(self.settle_delay);

        let result = self.messenger.send(app_name, recipient, message_text);
        if result.success {
            format!("✅ Opened {app_name} and sent message to {recipient}: '{message_text}'")
        } else {
            format!(
                "✅ Opened {app_name}, but failed to send message: {}",
                result.message
            )
        }
    }

    fn list_apps(&self) -> String {
        let apps = self.catalog.apps();
        if apps.is_empty() {
            return "No apps available".to_string();
        }
        let listing: Vec<String> = apps
            .iter()
            .take(LIST_LIMIT)
            .map(|app| format!("• {}: {}", app.name, app.description))
            .collect();
        let mut response = format!("Available apps:\n{}", listing.join("\n"));
        if apps.len() > LIST_LIMIT {
            response.push_str(&format!(
                "\n\n(showing first {LIST_LIMIT} of {} apps)",
                apps.len()
            ));
        }
        response
    }

    fn list_running_apps(&self) -> String {
        let processes = self.desktop.list_running();
        if processes.is_empty() {
            return "No running apps detected".to_string();
        }
        let listing: Vec<String> = processes
            .iter()
            .take(LIST_LIMIT)
            .map(|process| format!("• {}", process.name))
            .collect();
        let mut response = format!("Running apps:\n{}", listing.join("\n"));
        if processes.len() > LIST_LIMIT {
            response.push_str(&format!(
                "\n\n(showing first {LIST_LIMIT} of {} apps)",
                processes.len()
            ));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::command::parser::parse;
    use crate::config::Config;
    use crate::error::TalkError;
    use crate::platform::types::{AppAction, HostOs, LaunchOutcome, ProcessInfo};
    use crate::platform::{Platform, SharedPlatform};
    use crate::types::ActionResult;

    struct FakePlatform {
        launch_succeeds: bool,
        script_succeeds: bool,
        process_count: usize,
    }

    impl Default for FakePlatform {
        fn default() -> Self {
            Self {
                launch_succeeds: true,
                script_succeeds: true,
                process_count: 0,
            }
        }
    }

    impl Platform for FakePlatform {
        fn id(&self) -> &str {
            "fake"
        }

        fn launch(&self, token: &str) -> crate::error::TalkResult<LaunchOutcome> {
            if self.launch_succeeds {
                Ok(LaunchOutcome {
                    pid: None,
                    command: format!("fake {token}"),
                })
            } else {
                Err(TalkError::Launch {
                    app: token.to_string(),
                    reason: "fake launch refused".to_string(),
                })
            }
        }

        fn list_processes(&self) -> Vec<ProcessInfo> {
            (0..self.process_count)
                .map(|index| ProcessInfo {
                    name: format!("proc-{index}"),
                    platform_tag: "fake".to_string(),
                })
                .collect()
        }

        fn control(&self, app_name: &str, action: AppAction) -> ActionResult {
            ActionResult::ok(format!("Performed {} on {app_name}", action.name()))
        }

        fn run_script(&self, _script: &str) -> crate::error::TalkResult<String> {
            if self.script_succeeds {
                Ok(String::new())
            } else {
                Err(TalkError::Automation("osascript exited 1".to_string()))
            }
        }
    }

    fn dispatcher_with(platform: FakePlatform, host: Option<HostOs>) -> Dispatcher {
        let shared: SharedPlatform = Arc::new(platform);
        Dispatcher::new(
            Desktop::new(shared.clone()),
            Catalog::new(host),
            Messenger::with_default_channels(shared),
            Box::new(Config::in_memory()),
            Duration::ZERO,
        )
    }

    fn dispatch(dispatcher: &mut Dispatcher, line: &str) -> String {
        dispatcher.dispatch(parse(line))
    }

    #[test]
    fn open_success_and_failure_have_distinct_glyphs() {
        let mut ok = dispatcher_with(FakePlatform::default(), Some(HostOs::MacOs));
        assert_eq!(
            dispatch(&mut ok, "open safari"),
            "✅ Successfully opened Safari"
        );

        let mut failing = dispatcher_with(
            FakePlatform {
                launch_succeeds: false,
                ..FakePlatform::default()
            },
            Some(HostOs::MacOs),
        );
        let response = dispatch(&mut failing, "open safari");
        assert!(response.starts_with("❌ Failed to open Safari:"));
        assert!(response.contains("fake launch refused"));
    }

    #[test]
    fn open_and_message_full_success() {
        let mut dispatcher = dispatcher_with(FakePlatform::default(), Some(HostOs::MacOs));
        let response = dispatch(
            &mut dispatcher,
            "open messages and send a message to Avery that says hi there",
        );
        assert_eq!(
            response,
            "✅ Opened messages and sent message to Avery: 'hi there'"
        );
    }

    #[test]
    fn unsupported_channel_is_a_partial_success() {
        let mut dispatcher = dispatcher_with(FakePlatform::default(), Some(HostOs::MacOs));
        let response = dispatch(
            &mut dispatcher,
            "open slack and send a message to team that says hi",
        );
        // Distinct from both the full-success and open-failure templates,
        // and still mentions the app was opened.
        assert!(response.starts_with("✅ Opened slack, but failed to send message:"));
        assert!(response.contains("Slack integration not yet implemented"));
    }

    #[test]
    fn failed_open_skips_the_message_step() {
        let mut dispatcher = dispatcher_with(
            FakePlatform {
                launch_succeeds: false,
                ..FakePlatform::default()
            },
            Some(HostOs::MacOs),
        );
        let response = dispatch(
            &mut dispatcher,
            "open messages and send a message to Avery that says hi",
        );
        assert!(response.starts_with("❌ Failed to open messages:"));
    }

    #[test]
    fn automation_failure_is_a_partial_success() {
        let mut dispatcher = dispatcher_with(
            FakePlatform {
                script_succeeds: false,
                ..FakePlatform::default()
            },
            Some(HostOs::MacOs),
        );
        let response = dispatch(
            &mut dispatcher,
            "open messages and send a message to Avery that says hi",
        );
        assert!(response.starts_with("✅ Opened messages, but failed to send message:"));
        assert!(response.contains("osascript exited 1"));
    }

    #[test]
    fn open_and_action_reports_without_executing() {
        let mut dispatcher = dispatcher_with(FakePlatform::default(), Some(HostOs::MacOs));
        assert_eq!(
            dispatch(&mut dispatcher, "open safari and check the news"),
            "✅ Opened safari. Action 'check the news' would be executed here."
        );
    }

    #[test]
    fn list_apps_truncates_at_ten_with_a_note() {
        // The macOS catalog has 15 entries.
        let mut dispatcher = dispatcher_with(FakePlatform::default(), Some(HostOs::MacOs));
        let response = dispatch(&mut dispatcher, "list apps");
        assert_eq!(response.matches('•').count(), 10);
        assert!(response.contains("(showing first 10 of 15 apps)"));
    }

    #[test]
    fn short_app_list_has_no_truncation_note() {
        // The Linux catalog has 8 entries.
        let mut dispatcher = dispatcher_with(FakePlatform::default(), Some(HostOs::Linux));
        let response = dispatch(&mut dispatcher, "list apps");
        assert_eq!(response.matches('•').count(), 8);
        assert!(!response.contains("showing first"));
    }

    #[test]
    fn empty_catalog_renders_the_no_apps_message() {
        let mut dispatcher = dispatcher_with(FakePlatform::default(), None);
        assert_eq!(dispatch(&mut dispatcher, "list apps"), "No apps available");
    }

    #[test]
    fn running_apps_truncate_and_report_empty() {
        let mut busy = dispatcher_with(
            FakePlatform {
                process_count: 15,
                ..FakePlatform::default()
            },
            Some(HostOs::MacOs),
        );
        let response = dispatch(&mut busy, "running apps");
        assert_eq!(response.matches('•').count(), 10);
        assert!(response.contains("(showing first 10 of 15 apps)"));

        let mut idle = dispatcher_with(FakePlatform::default(), Some(HostOs::MacOs));
        assert_eq!(
            dispatch(&mut idle, "running apps"),
            "No running apps detected"
        );
    }

    #[test]
    fn close_reports_the_adapter_message() {
        let mut dispatcher = dispatcher_with(FakePlatform::default(), Some(HostOs::MacOs));
        dispatch(&mut dispatcher, "open safari");
        let response = dispatch(&mut dispatcher, "close Safari");
        assert!(response.starts_with("✅ "));
        assert!(response.contains("quit"));
    }

    #[test]
    fn task_flow_set_query_clear() {
        let mut dispatcher = dispatcher_with(FakePlatform::default(), Some(HostOs::MacOs));
        assert!(dispatch(&mut dispatcher, "task").starts_with("No task description set."));

        dispatcher
            .tasks
            .set_task_description("write the report")
            .expect("set");
        assert_eq!(
            dispatch(&mut dispatcher, "task"),
            "Your current task: write the report"
        );

        assert!(dispatch(&mut dispatcher, "clear task").starts_with("✅ Task cleared."));
        assert!(dispatch(&mut dispatcher, "task").starts_with("No task description set."));
    }

    #[test]
    fn echo_time_and_status_render() {
        let mut dispatcher = dispatcher_with(FakePlatform::default(), Some(HostOs::MacOs));
        assert_eq!(
            dispatch(&mut dispatcher, "something else"),
            "Echo: something else"
        );
        assert!(dispatch(&mut dispatcher, "time").starts_with("Current time: "));
        assert!(dispatch(&mut dispatcher, "status").starts_with("Status: Running, uptime:"));
    }
}
