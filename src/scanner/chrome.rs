use crate::blocklist::Blocklist;
use crate::model::{Browser, ProfileScanResult};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use super::chromium::scan_profiles;

pub struct ChromeScanner;

#[async_trait]
impl super::Scanner for ChromeScanner {
    fn name(&self) -> &'static str {
        "Chrome"
    }

    fn browser(&self) -> Browser {
        Browser::Chrome
    }

    async fn scan(&self, root: &Path, blocklist: &Blocklist) -> Result<Vec<ProfileScanResult>> {
        scan_profiles(Browser::Chrome, root, blocklist)
    }
}
