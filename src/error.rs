use std::fmt;

/// Unified error type for the apptalk crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalkError {
    /// A command was submitted before the session was started.
    NotRunning,
    /// `start` was called on a session that is already running.
    AlreadyRunning,
    /// Every launch strategy for an application was exhausted.
    Launch { app: String, reason: String },
    /// A scripted automation step exited non-zero or timed out.
    Automation(String),
    /// The host operating system is not recognized.
    UnsupportedOs(String),
    /// Internal error.
    Internal(String),
}

impl fmt::Display for TalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalkError::NotRunning => write!(f, "apptalk is not running"),
            TalkError::AlreadyRunning => write!(f, "apptalk is already running"),
            TalkError::Launch { app, reason } => {
                write!(f, "could not open {app}: {reason}")
            }
            TalkError::Automation(msg) => write!(f, "automation failed: {msg}"),
            TalkError::UnsupportedOs(os) => write!(f, "unsupported operating system: {os}"),
            TalkError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for TalkError {}

/// Result type alias using [`TalkError`].
pub type TalkResult<T> = Result<T, TalkError>;
