use std::collections::HashMap;

use chrono::Local;

use super::adapters::SharedPlatform;
use super::types::{AppAction, AppStatus, ProcessInfo, TrackedApp};
use crate::error::TalkResult;
use crate::types::ActionResult;

/// Owns the platform adapter and the registry of applications this process
/// believes it launched. Single-threaded by design; a concurrent caller must
/// add its own mutual exclusion around this handle.
pub struct Desktop {
    platform: SharedPlatform,
    tracked: HashMap<String, TrackedApp>,
}

impl Desktop {
    pub fn new(platform: SharedPlatform) -> Self {
        Self {
            platform,
            tracked: HashMap::new(),
        }
    }

    /// Launch an application and record it as tracked.
    pub fn open_application(&mut self, display_name: &str, token: &str) -> TalkResult<TrackedApp> {
        tracing::info!("opening application {display_name} (token {token})");
        let outcome = self.platform.launch(token)?;

        let started_at = Local::now();
        let app = TrackedApp {
            app_id: format!("{display_name}_{}", started_at.timestamp()),
            name: display_name.to_string(),
            pid: outcome.pid,
            started_at,
            status: AppStatus::Running,
        };
        self.tracked.insert(app.app_id.clone(), app.clone());
        Ok(app)
    }

    pub fn list_running(&self) -> Vec<ProcessInfo> {
        self.platform.list_processes()
    }

    /// Send a control action, validating the action name first so an unknown
    /// action is echoed back instead of reaching the adapter.
    pub fn interact(&self, app_name: &str, action: &str) -> ActionResult {
        match AppAction::parse(action) {
            Some(parsed) => self.platform.control(app_name, parsed),
            None => ActionResult::failure(format!("unknown action {action} on {app_name}"))
                .with_detail(serde_json::json!({ "action": action })),
        }
    }

    /// Quit an application by name, preferring a tracked running entry.
    pub fn close_by_name(&mut self, app_name: &str) -> ActionResult {
        let tracked_id = self
            .tracked
            .values()
            .find(|app| app.status == AppStatus::Running && app.name.eq_ignore_ascii_case(app_name))
            .map(|app| app.app_id.clone());

        match tracked_id {
            Some(app_id) => self.close_tracked(&app_id),
            None => self.platform.control(app_name, AppAction::Quit),
        }
    }

    /// Quit a tracked application by id. Repeated closes fail instead of
    /// mutating state twice.
    pub fn close_tracked(&mut self, app_id: &str) -> ActionResult {
        let Some(app) = self.tracked.get(app_id) else {
            return ActionResult::failure(format!("application {app_id} not found"));
        };
        if app.status == AppStatus::Closed {
            return ActionResult::failure(format!("application {app_id} already closed"));
        }

        let name = app.name.clone();
        let result = self.platform.control(&name, AppAction::Quit);
        if result.success {
            if let Some(app) = self.tracked.get_mut(app_id) {
                app.status = AppStatus::Closed;
            }
        }
        result
    }

    pub fn tracked_app(&self, app_id: &str) -> Option<&TrackedApp> {
        self.tracked.get(app_id)
    }
}
