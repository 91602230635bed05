use std::time::Instant;

use crate::applications::registry::Catalog;
use crate::applications::Messenger;
use crate::command::{parse, Dispatcher};
use crate::config::Config;
use crate::error::{TalkError, TalkResult};
use crate::platform::{default_platform, Desktop, SharedPlatform};
use crate::types::Status;

/// Primary facade: session lifecycle plus free-text command dispatch.
///
/// All commands are refused until [`AppTalk::start`] has run; the not-running
/// guard is the one error that reaches the caller, every command outcome is
/// a returned string.
pub struct AppTalk {
    config: Config,
    platform: SharedPlatform,
    dispatcher: Option<Dispatcher>,
    started_at: Option<Instant>,
}

impl AppTalk {
    pub fn new(config: Config) -> Self {
        Self::with_platform(config, default_platform())
    }

    /// Build against a specific adapter (used by tests).
    pub fn with_platform(config: Config, platform: SharedPlatform) -> Self {
        Self {
            config,
            platform,
            dispatcher: None,
            started_at: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.dispatcher.is_some()
    }

    /// Start the session, wiring the adapter, registry and messenger.
    pub fn start(&mut self) -> TalkResult<()> {
        if self.dispatcher.is_some() {
            return Err(TalkError::AlreadyRunning);
        }
        tracing::info!("starting apptalk on {}", self.platform.id());

        let desktop = Desktop::new(self.platform.clone());
        let messenger = Messenger::with_default_channels(self.platform.clone());
        self.dispatcher = Some(Dispatcher::new(
            desktop,
            Catalog::for_host(),
            messenger,
            Box::new(self.config.clone()),
            self.config.settle_delay(),
        ));
        self.started_at = Some(Instant::now());
        tracing::info!("apptalk started");
        Ok(())
    }

    pub fn stop(&mut self) -> TalkResult<()> {
        if self.dispatcher.is_none() {
            return Err(TalkError::NotRunning);
        }
        tracing::info!("stopping apptalk");
        self.dispatcher = None;
        self.started_at = None;
        Ok(())
    }

    /// Interpret one command line and return the single response string.
    pub fn send_message(&mut self, line: &str) -> TalkResult<String> {
        let Some(dispatcher) = self.dispatcher.as_mut() else {
            return Err(TalkError::NotRunning);
        };
        tracing::debug!("processing command: {line:?}");
        Ok(dispatcher.dispatch(parse(line)))
    }

    pub fn status(&self) -> Status {
        Status {
            running: self.is_running(),
            uptime_secs: self
                .started_at
                .map(|started| started.elapsed().as_secs_f64())
                .unwrap_or(0.0),
        }
    }

    pub fn capabilities(&self) -> &'static [&'static str] {
        &[
            "echo_messages",
            "time_queries",
            "status_queries",
            "task_management",
            "desktop_apps",
            "app_control",
        ]
    }
}
