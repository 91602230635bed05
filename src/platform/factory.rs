use std::sync::Arc;

use super::adapters::{linux, macos, unsupported, windows, SharedPlatform};
use super::types::HostOs;

/// Select the adapter for the host this process is running on.
pub fn default_platform() -> SharedPlatform {
    platform_for(std::env::consts::OS)
}

/// Select an adapter from an OS identifier string.
pub fn platform_for(identifier: &str) -> SharedPlatform {
    match HostOs::from_identifier(identifier) {
        Some(HostOs::MacOs) => Arc::new(macos::MacosAdapter::new()),
        Some(HostOs::Windows) => Arc::new(windows::WindowsAdapter::new()),
        Some(HostOs::Linux) => Arc::new(linux::LinuxAdapter::new()),
        None => Arc::new(unsupported::UnsupportedAdapter::new(identifier)),
    }
}
