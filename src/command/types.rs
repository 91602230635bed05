/// The classified, structured meaning of one input command line.
///
/// Exactly one variant is produced per input; [`Intent::Echo`] is the total
/// fallback, so parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Reply with pre-formatted text: a greeting, a literal passthrough, or a
    /// parse-failure report.
    Echo { reply: String },
    TimeQuery,
    StatusQuery,
    TaskQuery,
    TaskClear,
    OpenApp {
        app_name: String,
    },
    OpenAndMessage {
        app_name: String,
        recipient: String,
        message_text: String,
    },
    OpenAndAction {
        app_name: String,
        action: String,
    },
    ListApps,
    ListRunningApps,
    CloseApp {
        app_name: String,
    },
}
