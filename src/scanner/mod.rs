//! Browser profile scanners.
//!
//! This module provides the [`Scanner`] trait and implementations for
//! enumerating installed extensions in each browser profile and matching
//! them against the blocklist.
//!
//! # Available Scanners
//!
//! | Scanner | Browser | Platforms |
//! |---------|---------|-----------|
//! | [`ChromeScanner`] | Google Chrome | All |
//! | [`BraveScanner`] | Brave Browser | All |
//!
//! Both browsers are Chromium-based and share the same profile layout, so
//! both scanners delegate to [`chromium`].
//!
//! # Example
//!
//! ```no_run
//! use pandascan::blocklist::Blocklist;
//! use pandascan::platform::discover_browsers;
//! use pandascan::scanner::{get_scanner, Scanner};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let blocklist = Blocklist::default();
//!     for install in discover_browsers()? {
//!         let scanner = get_scanner(install.browser);
//!         let results = scanner.scan(&install.root, &blocklist).await?;
//!         println!("{}: {} profile(s)", scanner.name(), results.len());
//!     }
//!     Ok(())
//! }
//! ```

mod brave;
mod chrome;
pub(crate) mod chromium;

pub use brave::BraveScanner;
pub use chrome::ChromeScanner;
pub use chromium::{discover_profiles, scan_extensions};

use crate::blocklist::Blocklist;
use crate::model::{Browser, ProfileScanResult};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Trait for scanning one browser's profiles for blocklisted extensions.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Returns the human-readable name of this scanner.
    fn name(&self) -> &'static str;

    /// Returns the browser this scanner handles.
    fn browser(&self) -> Browser;

    /// Scans every profile under `root` and returns one result per
    /// profile with a readable `Extensions` directory, in directory
    /// discovery order.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser root itself cannot be read.
    /// Profiles with a missing or unreadable `Extensions` directory are
    /// skipped, never reported as errors.
    async fn scan(&self, root: &Path, blocklist: &Blocklist) -> Result<Vec<ProfileScanResult>>;
}

/// Returns a list of all available scanners, in browser discovery order.
pub fn all_scanners() -> Vec<Box<dyn Scanner>> {
    vec![Box::new(ChromeScanner), Box::new(BraveScanner)]
}

/// Returns the scanner for a specific browser.
///
/// # Example
///
/// ```
/// use pandascan::model::Browser;
/// use pandascan::scanner::get_scanner;
///
/// let scanner = get_scanner(Browser::Brave);
/// assert_eq!(scanner.name(), "Brave");
/// ```
pub fn get_scanner(browser: Browser) -> Box<dyn Scanner> {
    match browser {
        Browser::Chrome => Box::new(ChromeScanner),
        Browser::Brave => Box::new(BraveScanner),
    }
}
