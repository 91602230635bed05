//! Message sending through desktop applications.
//!
//! Only the iMessage channel is real: a scripted UI automation sequence with
//! fixed settle delays and synthetic keystrokes, no feedback loop confirming
//! the UI reached the expected state. Failure is detected solely through the
//! automation host's exit code and error stream.

use crate::platform::applescript::applescript_escape;
use crate::platform::SharedPlatform;
use crate::types::ActionResult;

/// A messaging channel keyed by the application names it serves.
pub trait MessageChannel {
    fn supports(&self, app_name: &str) -> bool;
    fn send(&self, recipient: &str, message: &str) -> ActionResult;
}

/// Routes a send request to the channel serving the named application.
pub struct Messenger {
    channels: Vec<Box<dyn MessageChannel>>,
}

impl Messenger {
    pub fn new(channels: Vec<Box<dyn MessageChannel>>) -> Self {
        Self { channels }
    }

    /// The default channel set: iMessage plus the placeholder channels.
    pub fn with_default_channels(platform: SharedPlatform) -> Self {
        Self::new(vec![
            Box::new(IMessageChannel { platform }),
            Box::new(StubChannel::slack()),
            Box::new(StubChannel::discord()),
        ])
    }

    pub fn send(&self, app_name: &str, recipient: &str, message: &str) -> ActionResult {
        match self
            .channels
            .iter()
            .find(|channel| channel.supports(app_name))
        {
            Some(channel) => channel.send(recipient, message),
            None => {
                ActionResult::failure(format!("Message sending not supported for {app_name}"))
            }
        }
    }
}

/// iMessage over scripted UI automation: activate Messages, wait for the UI
/// to settle, open a new conversation, type the recipient and body with
/// confirming returns between each step.
pub struct IMessageChannel {
    platform: SharedPlatform,
}

impl IMessageChannel {
    fn script(recipient: &str, message: &str) -> String {
        let recipient = applescript_escape(recipient);
        let message = applescript_escape(message);
        format!(
            r#"tell application "Messages"
    activate
    delay 2
    tell application "System Events"
        keystroke "n" using command down
        delay 1
        keystroke "{recipient}"
        delay 1
        keystroke return
        delay 1
        keystroke "{message}"
        delay 1
        keystroke return
    end tell
end tell"#
        )
    }
}

impl MessageChannel for IMessageChannel {
    fn supports(&self, app_name: &str) -> bool {
        matches!(app_name.to_lowercase().as_str(), "messages" | "message")
    }

    fn send(&self, recipient: &str, message: &str) -> ActionResult {
        tracing::info!("sending iMessage to {recipient}");
        match self.platform.run_script(&Self::script(recipient, message)) {
            Ok(stdout) => {
                ActionResult::ok("iMessage sent").with_detail(serde_json::json!({
                    "stdout": stdout,
                }))
            }
            Err(error) => ActionResult::failure(format!("Failed: {error}")),
        }
    }
}

/// Placeholder for channels that are recognized but not implemented.
pub struct StubChannel {
    app_name: &'static str,
    label: &'static str,
}

impl StubChannel {
    pub fn slack() -> Self {
        Self {
            app_name: "slack",
            label: "Slack",
        }
    }

    pub fn discord() -> Self {
        Self {
            app_name: "discord",
            label: "Discord",
        }
    }
}

impl MessageChannel for StubChannel {
    fn supports(&self, app_name: &str) -> bool {
        app_name.eq_ignore_ascii_case(self.app_name)
    }

    fn send(&self, _recipient: &str, _message: &str) -> ActionResult {
        ActionResult::failure(format!("{} integration not yet implemented", self.label))
    }
}
