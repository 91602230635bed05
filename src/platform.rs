mod adapters;
pub mod applescript;
pub mod desktop;
pub mod factory;
pub mod process;
pub mod types;

pub use adapters::{Platform, SharedPlatform};
pub use desktop::Desktop;
pub use factory::{default_platform, platform_for};
pub use types::{AppAction, AppStatus, HostOs, LaunchOutcome, ProcessInfo, TrackedApp};
