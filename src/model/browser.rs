use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Brave,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Brave => "brave",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Brave => "Brave",
        }
    }

    /// All supported browsers, in discovery order.
    pub fn all() -> &'static [Browser] {
        &[Browser::Chrome, Browser::Brave]
    }
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
}

impl Platform {
    /// Returns the host platform, or `None` when the scanner has no path
    /// templates for it.
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "linux") {
            Some(Platform::Linux)
        } else if cfg!(target_os = "macos") {
            Some(Platform::MacOS)
        } else if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A browser installation discovered on disk.
///
/// Constructed only for browsers whose profile root exists and is a
/// directory at discovery time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInstall {
    pub browser: Browser,
    /// Absolute path to the browser's profile-storage root.
    pub root: PathBuf,
}

impl BrowserInstall {
    pub fn new(browser: Browser, root: impl Into<PathBuf>) -> Self {
        Self {
            browser,
            root: root.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_display_names() {
        assert_eq!(Browser::Chrome.display_name(), "Chrome");
        assert_eq!(Browser::Brave.display_name(), "Brave");
        assert_eq!(Browser::Chrome.as_str(), "chrome");
        assert_eq!(Browser::Brave.to_string(), "Brave");
    }

    #[test]
    fn test_browser_discovery_order() {
        assert_eq!(Browser::all(), &[Browser::Chrome, Browser::Brave]);
    }

    #[test]
    fn test_platform_current_is_known_on_tier_one() {
        // CI runs on one of the three supported platforms.
        assert!(Platform::current().is_some());
    }
}
