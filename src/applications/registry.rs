//! Static catalog of common applications per operating system.
//!
//! Used to normalize a free-text application name into the token the
//! platform adapter launches with, and to answer "list apps".

use serde::Serialize;

use crate::platform::HostOs;

/// One catalog entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AppDescriptor {
    /// Display name, as matched against user input.
    pub name: &'static str,
    pub description: &'static str,
    /// What the platform adapter is given to launch the app.
    pub launch_token: &'static str,
}

const MACOS_APPS: &[AppDescriptor] = &[
    AppDescriptor { name: "Safari", description: "Web browser", launch_token: "Safari" },
    AppDescriptor { name: "Chrome", description: "Web browser", launch_token: "Google Chrome" },
    AppDescriptor { name: "Firefox", description: "Web browser", launch_token: "Firefox" },
    AppDescriptor { name: "Terminal", description: "Command line terminal", launch_token: "Terminal" },
    AppDescriptor { name: "Finder", description: "File manager", launch_token: "Finder" },
    AppDescriptor { name: "TextEdit", description: "Text editor", launch_token: "TextEdit" },
    AppDescriptor { name: "Notes", description: "Note-taking app", launch_token: "Notes" },
    AppDescriptor { name: "Calendar", description: "Calendar app", launch_token: "Calendar" },
    AppDescriptor { name: "Mail", description: "Email client", launch_token: "Mail" },
    AppDescriptor { name: "Messages", description: "Messaging app", launch_token: "Messages" },
    AppDescriptor { name: "Spotify", description: "Music streaming", launch_token: "Spotify" },
    AppDescriptor { name: "VSCode", description: "Code editor", launch_token: "Visual Studio Code" },
    AppDescriptor { name: "Xcode", description: "iOS development", launch_token: "Xcode" },
    AppDescriptor { name: "Photos", description: "Photo management", launch_token: "Photos" },
    AppDescriptor { name: "Preview", description: "PDF and image viewer", launch_token: "Preview" },
];

const WINDOWS_APPS: &[AppDescriptor] = &[
    AppDescriptor { name: "Chrome", description: "Web browser", launch_token: "chrome" },
    AppDescriptor { name: "Firefox", description: "Web browser", launch_token: "firefox" },
    AppDescriptor { name: "Edge", description: "Web browser", launch_token: "msedge" },
    AppDescriptor { name: "Notepad", description: "Text editor", launch_token: "notepad" },
    AppDescriptor { name: "Word", description: "Word processor", launch_token: "winword" },
    AppDescriptor { name: "Excel", description: "Spreadsheet", launch_token: "excel" },
    AppDescriptor { name: "PowerPoint", description: "Presentation", launch_token: "powerpnt" },
    AppDescriptor { name: "VSCode", description: "Code editor", launch_token: "code" },
    AppDescriptor { name: "Calculator", description: "Calculator app", launch_token: "calc" },
    AppDescriptor { name: "Paint", description: "Image editor", launch_token: "mspaint" },
];

const LINUX_APPS: &[AppDescriptor] = &[
    AppDescriptor { name: "Chrome", description: "Web browser", launch_token: "google-chrome" },
    AppDescriptor { name: "Firefox", description: "Web browser", launch_token: "firefox" },
    AppDescriptor { name: "Terminal", description: "Command line", launch_token: "gnome-terminal" },
    AppDescriptor { name: "VSCode", description: "Code editor", launch_token: "code" },
    AppDescriptor { name: "Gedit", description: "Text editor", launch_token: "gedit" },
    AppDescriptor { name: "LibreOffice", description: "Office suite", launch_token: "libreoffice" },
    AppDescriptor { name: "GIMP", description: "Image editor", launch_token: "gimp" },
    AppDescriptor { name: "Calculator", description: "Calculator", launch_token: "gnome-calculator" },
];

/// Read-only view over one OS catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    host: Option<HostOs>,
}

impl Catalog {
    pub fn new(host: Option<HostOs>) -> Self {
        Self { host }
    }

    /// Catalog for the host this process is running on.
    pub fn for_host() -> Self {
        Self::new(HostOs::detect())
    }

    pub fn apps(&self) -> &'static [AppDescriptor] {
        match self.host {
            Some(HostOs::MacOs) => MACOS_APPS,
            Some(HostOs::Windows) => WINDOWS_APPS,
            Some(HostOs::Linux) => LINUX_APPS,
            None => &[],
        }
    }

    /// Normalize a free-text name to the launch token; unknown names pass
    /// through unchanged.
    pub fn launch_token(&self, app_name: &str) -> String {
        self.apps()
            .iter()
            .find(|app| app.name.eq_ignore_ascii_case(app_name))
            .map(|app| app.launch_token.to_string())
            .unwrap_or_else(|| app_name.to_string())
    }
}
