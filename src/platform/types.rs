use chrono::{DateTime, Local};
use serde::Serialize;

/// Operating systems with a real adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOs {
    MacOs,
    Windows,
    Linux,
}

impl HostOs {
    /// Detect the host from the compile-time OS identifier.
    pub fn detect() -> Option<Self> {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Map an OS identifier string (`std::env::consts::OS` vocabulary) to a host.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "macos" => Some(HostOs::MacOs),
            "windows" => Some(HostOs::Windows),
            "linux" => Some(HostOs::Linux),
            _ => None,
        }
    }

    /// Tag used in process listings and acknowledgment messages.
    pub fn tag(&self) -> &'static str {
        match self {
            HostOs::MacOs => "macOS",
            HostOs::Windows => "Windows",
            HostOs::Linux => "Linux",
        }
    }
}

/// Control actions understood by the adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Activate,
    Close,
    Quit,
    Minimize,
    Maximize,
}

impl AppAction {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "activate" => Some(AppAction::Activate),
            "close" => Some(AppAction::Close),
            "quit" => Some(AppAction::Quit),
            "minimize" => Some(AppAction::Minimize),
            "maximize" => Some(AppAction::Maximize),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AppAction::Activate => "activate",
            AppAction::Close => "close",
            AppAction::Quit => "quit",
            AppAction::Minimize => "minimize",
            AppAction::Maximize => "maximize",
        }
    }
}

/// One entry from the OS process enumeration.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessInfo {
    pub name: String,
    pub platform_tag: String,
}

/// What a successful launch reported back.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchOutcome {
    /// Pid of the spawned process, when the strategy exposes one.
    pub pid: Option<u32>,
    /// The launch command that was accepted.
    pub command: String,
}

/// Lifecycle of a tracked application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppStatus {
    Running,
    Closed,
}

/// In-memory record of an application this process believes it launched.
///
/// Never persisted across restarts.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedApp {
    /// Unique id, `{name}_{unix_timestamp}`.
    pub app_id: String,
    pub name: String,
    pub pid: Option<u32>,
    pub started_at: DateTime<Local>,
    pub status: AppStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_identifiers_resolve() {
        assert_eq!(HostOs::from_identifier("macos"), Some(HostOs::MacOs));
        assert_eq!(HostOs::from_identifier("windows"), Some(HostOs::Windows));
        assert_eq!(HostOs::from_identifier("linux"), Some(HostOs::Linux));
        assert_eq!(HostOs::from_identifier("freebsd"), None);
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            AppAction::Activate,
            AppAction::Close,
            AppAction::Quit,
            AppAction::Minimize,
            AppAction::Maximize,
        ] {
            assert_eq!(AppAction::parse(action.name()), Some(action));
        }
        assert_eq!(AppAction::parse("dance"), None);
    }
}
