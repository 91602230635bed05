use super::Platform;
use crate::error::{TalkError, TalkResult};
use crate::platform::types::{AppAction, LaunchOutcome, ProcessInfo};
use crate::types::ActionResult;

/// Adapter for hosts without application control support.
#[derive(Debug)]
pub struct UnsupportedAdapter {
    os: String,
}

impl UnsupportedAdapter {
    pub fn new(os_identifier: &str) -> Self {
        Self {
            os: os_identifier.to_string(),
        }
    }
}

impl Platform for UnsupportedAdapter {
    fn id(&self) -> &str {
        &self.os
    }

    fn launch(&self, _token: &str) -> TalkResult<LaunchOutcome> {
        Err(TalkError::UnsupportedOs(self.os.clone()))
    }

    fn list_processes(&self) -> Vec<ProcessInfo> {
        tracing::warn!("process enumeration not supported on {}", self.os);
        Vec::new()
    }

    fn control(&self, app_name: &str, action: AppAction) -> ActionResult {
        ActionResult::failure(format!(
            "cannot {} {app_name}: unsupported operating system {}",
            action.name(),
            self.os
        ))
        .with_detail(serde_json::json!({ "action": action.name() }))
    }
}
