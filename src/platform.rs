//! Cross-platform browser profile root resolution.
//!
//! This module knows where each supported browser keeps its user profiles
//! on every supported OS, and which of those roots actually exist on the
//! machine being scanned.
//!
//! Path templates are pure functions of a [`Platform`] and a [`HomeDirs`],
//! so tests can exercise every OS table from any host.

use crate::model::{Browser, BrowserInstall, Platform};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Fatal discovery failures. Either one means no browser path can be
/// computed, so the whole run aborts.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("could not resolve the user home directory")]
    HomeDirectoryUnavailable,
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

/// The per-user directories the path templates are built from.
///
/// Resolved once from the environment; tests inject fixture values.
#[derive(Debug, Clone)]
pub struct HomeDirs {
    pub home: PathBuf,
    /// `LOCALAPPDATA` when set (Windows); otherwise the template falls
    /// back to `<home>/AppData/Local`.
    pub local_app_data: Option<PathBuf>,
}

impl HomeDirs {
    pub fn resolve() -> Result<Self, DiscoverError> {
        let home = dirs::home_dir().ok_or(DiscoverError::HomeDirectoryUnavailable)?;
        let local_app_data = env::var_os("LOCALAPPDATA").map(PathBuf::from);
        Ok(Self {
            home,
            local_app_data,
        })
    }

    fn local_app_data_or_default(&self) -> PathBuf {
        self.local_app_data
            .clone()
            .unwrap_or_else(|| self.home.join("AppData").join("Local"))
    }
}

/// Returns the profile-storage root for a browser on a platform.
///
/// Platform-specific locations:
/// - Linux: `~/.config/google-chrome`, `~/.config/BraveSoftware/Brave-Browser`
/// - macOS: `~/Library/Application Support/Google/Chrome`,
///   `~/Library/Application Support/BraveSoftware/Brave-Browser`
/// - Windows: `%LOCALAPPDATA%\Google\Chrome\User Data`,
///   `%LOCALAPPDATA%\BraveSoftware\Brave-Browser\User Data`
pub fn browser_root(browser: Browser, platform: Platform, dirs: &HomeDirs) -> PathBuf {
    match (browser, platform) {
        (Browser::Chrome, Platform::Linux) => dirs.home.join(".config").join("google-chrome"),
        (Browser::Chrome, Platform::MacOS) => dirs
            .home
            .join("Library")
            .join("Application Support")
            .join("Google")
            .join("Chrome"),
        (Browser::Chrome, Platform::Windows) => dirs
            .local_app_data_or_default()
            .join("Google")
            .join("Chrome")
            .join("User Data"),
        (Browser::Brave, Platform::Linux) => dirs
            .home
            .join(".config")
            .join("BraveSoftware")
            .join("Brave-Browser"),
        (Browser::Brave, Platform::MacOS) => dirs
            .home
            .join("Library")
            .join("Application Support")
            .join("BraveSoftware")
            .join("Brave-Browser"),
        (Browser::Brave, Platform::Windows) => dirs
            .local_app_data_or_default()
            .join("BraveSoftware")
            .join("Brave-Browser")
            .join("User Data"),
    }
}

/// The root path the locator probes for every supported browser, whether
/// or not it exists. Used for the "no browsers found" help text.
pub fn expected_roots(platform: Platform, dirs: &HomeDirs) -> Vec<(Browser, PathBuf)> {
    Browser::all()
        .iter()
        .map(|&browser| (browser, browser_root(browser, platform, dirs)))
        .collect()
}

/// Finds the browsers installed on this machine.
///
/// A browser is included only if its profile root exists as a directory.
/// Absence is a normal "not installed" signal and is silently omitted;
/// an unreadable root is treated the same way but logged.
///
/// # Errors
///
/// Fails with [`DiscoverError::UnsupportedPlatform`] before any filesystem
/// access on an OS without path templates, or
/// [`DiscoverError::HomeDirectoryUnavailable`] when the home directory
/// cannot be resolved.
pub fn discover_browsers() -> Result<Vec<BrowserInstall>, DiscoverError> {
    let platform = current_platform()?;
    let dirs = HomeDirs::resolve()?;
    Ok(discover_browsers_in(platform, &dirs))
}

/// Resolves the host [`Platform`], failing on an OS the path table does
/// not cover.
pub fn current_platform() -> Result<Platform, DiscoverError> {
    Platform::current()
        .ok_or_else(|| DiscoverError::UnsupportedPlatform(env::consts::OS.to_string()))
}

/// Probe half of [`discover_browsers`], with the platform and home
/// directories supplied by the caller.
pub fn discover_browsers_in(platform: Platform, dirs: &HomeDirs) -> Vec<BrowserInstall> {
    let mut installs = Vec::new();

    for &browser in Browser::all() {
        let root = browser_root(browser, platform, dirs);
        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => {
                debug!(browser = browser.as_str(), root = %root.display(), "browser root found");
                installs.push(BrowserInstall::new(browser, root));
            }
            Ok(_) => {
                debug!(browser = browser.as_str(), root = %root.display(), "root is not a directory");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(browser = browser.as_str(), root = %root.display(), "browser not installed");
            }
            Err(e) => {
                // Indistinguishable from "not installed" by design; never fatal.
                warn!(browser = browser.as_str(), root = %root.display(), error = %e, "browser root unreadable, skipping");
            }
        }
    }

    installs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn fake_dirs(home: &str) -> HomeDirs {
        HomeDirs {
            home: PathBuf::from(home),
            local_app_data: None,
        }
    }

    #[test]
    fn test_linux_roots() {
        let dirs = fake_dirs("/home/u");
        assert_eq!(
            browser_root(Browser::Chrome, Platform::Linux, &dirs),
            Path::new("/home/u/.config/google-chrome")
        );
        assert_eq!(
            browser_root(Browser::Brave, Platform::Linux, &dirs),
            Path::new("/home/u/.config/BraveSoftware/Brave-Browser")
        );
    }

    #[test]
    fn test_macos_roots() {
        let dirs = fake_dirs("/Users/u");
        assert_eq!(
            browser_root(Browser::Chrome, Platform::MacOS, &dirs),
            Path::new("/Users/u/Library/Application Support/Google/Chrome")
        );
        assert_eq!(
            browser_root(Browser::Brave, Platform::MacOS, &dirs),
            Path::new("/Users/u/Library/Application Support/BraveSoftware/Brave-Browser")
        );
    }

    #[test]
    fn test_windows_roots_with_localappdata() {
        let dirs = HomeDirs {
            home: PathBuf::from("C:/Users/u"),
            local_app_data: Some(PathBuf::from("D:/AppData/Local")),
        };
        assert_eq!(
            browser_root(Browser::Chrome, Platform::Windows, &dirs),
            Path::new("D:/AppData/Local/Google/Chrome/User Data")
        );
        assert_eq!(
            browser_root(Browser::Brave, Platform::Windows, &dirs),
            Path::new("D:/AppData/Local/BraveSoftware/Brave-Browser/User Data")
        );
    }

    #[test]
    fn test_windows_roots_fall_back_to_home() {
        let dirs = fake_dirs("C:/Users/u");
        assert_eq!(
            browser_root(Browser::Chrome, Platform::Windows, &dirs),
            Path::new("C:/Users/u/AppData/Local/Google/Chrome/User Data")
        );
    }

    #[test]
    fn test_expected_roots_cover_all_browsers_in_order() {
        let dirs = fake_dirs("/home/u");
        let roots = expected_roots(Platform::Linux, &dirs);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].0, Browser::Chrome);
        assert_eq!(roots[1].0, Browser::Brave);
    }

    #[test]
    fn test_discover_finds_only_existing_roots() {
        let home = TempDir::new().unwrap();
        let chrome_root = home.path().join(".config").join("google-chrome");
        fs::create_dir_all(&chrome_root).unwrap();

        let dirs = HomeDirs {
            home: home.path().to_path_buf(),
            local_app_data: None,
        };
        let installs = discover_browsers_in(Platform::Linux, &dirs);
        assert_eq!(installs.len(), 1);
        assert_eq!(installs[0].browser, Browser::Chrome);
        assert_eq!(installs[0].root, chrome_root);
    }

    #[test]
    fn test_discover_with_no_browsers() {
        let home = TempDir::new().unwrap();
        let dirs = HomeDirs {
            home: home.path().to_path_buf(),
            local_app_data: None,
        };
        assert!(discover_browsers_in(Platform::Linux, &dirs).is_empty());
    }

    #[test]
    fn test_discover_skips_root_that_is_a_file() {
        let home = TempDir::new().unwrap();
        let config = home.path().join(".config");
        fs::create_dir_all(&config).unwrap();
        fs::write(config.join("google-chrome"), b"not a dir").unwrap();

        let dirs = HomeDirs {
            home: home.path().to_path_buf(),
            local_app_data: None,
        };
        assert!(discover_browsers_in(Platform::Linux, &dirs).is_empty());
    }
}
