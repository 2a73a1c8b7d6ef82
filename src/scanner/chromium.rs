//! Shared profile and extension enumeration for Chromium-based browsers.
//!
//! Chromium keeps each user profile in its own directory under the browser
//! root ("Default", "Profile 1", "Profile 2", ...), and each profile
//! installs extensions as subdirectories of `<profile>/Extensions` named by
//! extension ID.

use crate::blocklist::Blocklist;
use crate::model::{Browser, ProfileScanResult};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Lists the profile directories under a browser root.
///
/// A directory entry is a profile only if its name is exactly `Default`
/// or starts with `Profile ` (case-sensitive). Non-directories and other
/// names are ignored. Order follows the underlying directory listing.
pub fn discover_profiles(root: &Path) -> io::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root)?;
    let mut profiles = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name == "Default" || name.starts_with("Profile ") {
            profiles.push(path);
        }
    }

    Ok(profiles)
}

/// Enumerates one profile's `Extensions` directory against the blocklist.
///
/// Every subdirectory counts as one installed extension; its name is the
/// extension ID. Stray files are skipped and never counted. Blocklisted
/// IDs are returned in enumeration order.
pub fn scan_extensions(
    extensions_dir: &Path,
    blocklist: &Blocklist,
) -> io::Result<(Vec<String>, usize)> {
    let entries = fs::read_dir(extensions_dir)?;
    let mut flagged = Vec::new();
    let mut installed = 0;

    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }

        installed += 1;
        let extension_id = entry.file_name().to_string_lossy().to_string();
        if blocklist.contains(&extension_id) {
            flagged.push(extension_id);
        }
    }

    Ok((flagged, installed))
}

/// Scans every profile under a browser root.
///
/// Profiles with no `Extensions` directory produce no result at all;
/// unreadable ones are skipped the same way. Each filesystem check is a
/// single attempt, no retries.
pub fn scan_profiles(
    browser: Browser,
    root: &Path,
    blocklist: &Blocklist,
) -> Result<Vec<ProfileScanResult>> {
    let profiles = discover_profiles(root)
        .with_context(|| format!("failed to read browser directory: {}", root.display()))?;

    let mut results = Vec::new();

    for profile_path in profiles {
        let profile_name = profile_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let extensions_dir = profile_path.join("Extensions");

        let (flagged, installed) = match scan_extensions(&extensions_dir, blocklist) {
            Ok(counts) => counts,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(browser = browser.as_str(), profile = %profile_name, "no Extensions directory");
                continue;
            }
            Err(e) => {
                warn!(browser = browser.as_str(), profile = %profile_name, error = %e, "Extensions directory unreadable, skipping profile");
                continue;
            }
        };

        results.push(ProfileScanResult::new(
            browser,
            profile_name,
            extensions_dir,
            installed,
            flagged,
        ));
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ID_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const ID_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
    const ID_C: &str = "cccccccccccccccccccccccccccccccc";

    fn test_blocklist() -> Blocklist {
        Blocklist::new(&[ID_A, ID_B])
    }

    #[test]
    fn test_discover_profiles_filters_names() {
        let root = TempDir::new().unwrap();
        for dir in ["Default", "Profile 1", "Profile 12", "Guest Profile", "System Profile", "Crashpad"] {
            fs::create_dir(root.path().join(dir)).unwrap();
        }
        fs::write(root.path().join("Profile 2"), b"a file, not a profile").unwrap();

        let mut profiles: Vec<String> = discover_profiles(root.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        profiles.sort();

        assert_eq!(profiles, vec!["Default", "Profile 1", "Profile 12"]);
    }

    #[test]
    fn test_discover_profiles_missing_root() {
        let root = TempDir::new().unwrap();
        let err = discover_profiles(&root.path().join("gone")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_scan_extensions_counts_only_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(ID_A)).unwrap();
        fs::create_dir(dir.path().join(ID_C)).unwrap();
        fs::write(dir.path().join("notes.txt"), b"stray file").unwrap();

        let (flagged, installed) = scan_extensions(dir.path(), &test_blocklist()).unwrap();
        assert_eq!(installed, 2);
        assert_eq!(flagged, vec![ID_A.to_string()]);
    }

    #[test]
    fn test_scan_extensions_empty_dir() {
        let dir = TempDir::new().unwrap();
        let (flagged, installed) = scan_extensions(dir.path(), &test_blocklist()).unwrap();
        assert_eq!(installed, 0);
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_scan_profiles_two_empty_profiles() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("Default").join("Extensions")).unwrap();
        fs::create_dir_all(root.path().join("Profile 1").join("Extensions")).unwrap();

        let results = scan_profiles(Browser::Chrome, root.path(), &test_blocklist()).unwrap();
        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.installed, 0);
            assert!(result.flagged.is_empty());
            assert_eq!(result.browser, Browser::Chrome);
        }
    }

    #[test]
    fn test_scan_profiles_skips_profile_without_extensions_dir() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("Default")).unwrap();
        fs::create_dir_all(root.path().join("Profile 1").join("Extensions").join(ID_B)).unwrap();

        let results = scan_profiles(Browser::Brave, root.path(), &test_blocklist()).unwrap();
        // "Default" has no Extensions dir, so it contributes nothing at all.
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].profile, "Profile 1");
        assert_eq!(results[0].installed, 1);
        assert_eq!(results[0].flagged, vec![ID_B.to_string()]);
        assert_eq!(
            results[0].extensions_path,
            root.path().join("Profile 1").join("Extensions")
        );
    }

    #[test]
    fn test_scan_profiles_flags_literal_scenario() {
        let root = TempDir::new().unwrap();
        let ext = root.path().join("Default").join("Extensions");
        fs::create_dir_all(ext.join(ID_A)).unwrap();
        fs::create_dir_all(ext.join(ID_C)).unwrap();
        fs::write(ext.join("notes.txt"), b"stray file").unwrap();

        let results = scan_profiles(Browser::Chrome, root.path(), &test_blocklist()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].installed, 2);
        assert_eq!(results[0].flagged, vec![ID_A.to_string()]);
    }

    #[test]
    fn test_scan_profiles_unreadable_root_is_an_error() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("gone");
        assert!(scan_profiles(Browser::Chrome, &missing, &test_blocklist()).is_err());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let root = TempDir::new().unwrap();
        let ext = root.path().join("Default").join("Extensions");
        fs::create_dir_all(ext.join(ID_A)).unwrap();
        fs::create_dir_all(ext.join(ID_B)).unwrap();
        fs::create_dir_all(ext.join(ID_C)).unwrap();

        let first = scan_profiles(Browser::Chrome, root.path(), &test_blocklist()).unwrap();
        let second = scan_profiles(Browser::Chrome, root.path(), &test_blocklist()).unwrap();
        assert_eq!(first, second);
    }
}
