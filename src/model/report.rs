use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{Browser, Platform};

/// The outcome of scanning one browser profile.
///
/// One instance exists per profile with a readable `Extensions` directory;
/// profiles without one produce no result at all. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileScanResult {
    pub browser: Browser,
    /// Profile directory name ("Default", "Profile 1", ...).
    pub profile: String,
    /// Absolute path to the profile's `Extensions` directory.
    pub extensions_path: PathBuf,
    /// Total extensions installed in this profile.
    pub installed: usize,
    /// Blocklisted IDs found, in enumeration order.
    pub flagged: Vec<String>,
}

impl ProfileScanResult {
    pub fn new(
        browser: Browser,
        profile: impl Into<String>,
        extensions_path: impl Into<PathBuf>,
        installed: usize,
        flagged: Vec<String>,
    ) -> Self {
        Self {
            browser,
            profile: profile.into(),
            extensions_path: extensions_path.into(),
            installed,
            flagged,
        }
    }

    /// Filesystem path of one flagged extension inside this profile.
    pub fn extension_path(&self, id: &str) -> PathBuf {
        self.extensions_path.join(id)
    }
}

/// Aggregate results of a full scan, ordered by browser discovery order
/// then profile discovery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub scan_time: DateTime<Utc>,
    pub platform: Platform,
    /// Number of distinct IDs the scan checked against.
    pub blocklist_size: usize,
    pub profiles: Vec<ProfileScanResult>,
}

impl ScanReport {
    pub fn new(platform: Platform, blocklist_size: usize, profiles: Vec<ProfileScanResult>) -> Self {
        Self {
            scan_time: Utc::now(),
            platform,
            blocklist_size,
            profiles,
        }
    }

    /// True iff at least one profile has a non-empty flagged list.
    pub fn any_flagged(&self) -> bool {
        self.profiles.iter().any(|p| !p.flagged.is_empty())
    }

    pub fn total_installed(&self) -> usize {
        self.profiles.iter().map(|p| p.installed).sum()
    }

    pub fn total_flagged(&self) -> usize {
        self.profiles.iter().map(|p| p.flagged.len()).sum()
    }

    /// Profile counts per browser, in browser discovery order.
    pub fn profiles_per_browser(&self) -> Vec<(Browser, usize)> {
        Browser::all()
            .iter()
            .filter_map(|&browser| {
                let count = self.profiles.iter().filter(|p| p.browser == browser).count();
                (count > 0).then_some((browser, count))
            })
            .collect()
    }
}
