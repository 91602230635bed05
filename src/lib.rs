pub mod applications;
pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod platform;
pub mod types;

pub use crate::command::{parse, Dispatcher, Intent};
pub use crate::config::{Config, TaskStore};
pub use crate::core::AppTalk;
pub use crate::error::{TalkError, TalkResult};
pub use crate::types::{ActionResult, Status};
