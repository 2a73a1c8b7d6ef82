use crate::blocklist::Blocklist;
use crate::model::{Browser, ProfileScanResult};
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use super::chromium::scan_profiles;

pub struct BraveScanner;

#[async_trait]
impl super::Scanner for BraveScanner {
    fn name(&self) -> &'static str {
        "Brave"
    }

    fn browser(&self) -> Browser {
        Browser::Brave
    }

    async fn scan(&self, root: &Path, blocklist: &Blocklist) -> Result<Vec<ProfileScanResult>> {
        scan_profiles(Browser::Brave, root, blocklist)
    }
}
