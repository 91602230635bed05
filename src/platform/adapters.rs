use std::sync::Arc;
use std::time::Duration;

use crate::error::{TalkError, TalkResult};
use crate::types::ActionResult;

use super::types::{AppAction, LaunchOutcome, ProcessInfo};

/// Timeout for launch and control calls.
pub(crate) const COMMAND_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for process enumeration.
pub(crate) const ENUMERATION_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for scripted UI automation, which carries its own internal delays.
pub(crate) const AUTOMATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-OS application control primitives.
pub trait Platform: Send + Sync {
    /// OS identifier this adapter serves.
    fn id(&self) -> &str;

    /// Launch an application by its launch token.
    ///
    /// Strategies are tried in order; the first one with an accepted exit wins.
    /// Errors only when every strategy has been exhausted.
    fn launch(&self, token: &str) -> TalkResult<LaunchOutcome>;

    /// Enumerate running processes. Enumeration failure is swallowed and
    /// logged; the caller always gets a list, possibly empty.
    fn list_processes(&self) -> Vec<ProcessInfo>;

    /// Send a control action to a named application.
    fn control(&self, app_name: &str, action: AppAction) -> ActionResult;

    /// Run a UI-automation script. Only macOS has a scripting hook.
    fn run_script(&self, _script: &str) -> TalkResult<String> {
        Err(TalkError::Automation(format!(
            "scripted automation not supported on {}",
            self.id()
        )))
    }
}

pub type SharedPlatform = Arc<dyn Platform>;

pub mod linux;
pub mod macos;
pub mod unsupported;
pub mod windows;
