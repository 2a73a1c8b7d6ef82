//! Core data types for browsers, profiles, and scan results.
//!
//! This module contains the fundamental types used throughout pandascan:
//!
//! - [`Browser`] - A supported browser family
//! - [`Platform`] - Operating system platform
//! - [`BrowserInstall`] - A browser found on disk with its profile root
//! - [`ProfileScanResult`] - One scanned profile and its flagged IDs
//! - [`ScanReport`] - Complete scan results
//!
//! # Example
//!
//! ```
//! use pandascan::model::{Browser, Platform, ProfileScanResult, ScanReport};
//!
//! let profile = ProfileScanResult::new(Browser::Chrome, "Default", "/tmp/Extensions", 3, vec![]);
//! let report = ScanReport::new(Platform::Linux, 27, vec![profile]);
//!
//! assert!(!report.any_flagged());
//! ```

mod browser;
mod report;

pub use browser::*;
pub use report::*;
