pub mod blocklist;
pub mod model;
pub mod output;
pub mod platform;
pub mod scanner;

pub use blocklist::Blocklist;
pub use model::{Browser, BrowserInstall, Platform, ProfileScanResult, ScanReport};
pub use scanner::Scanner;
