use crate::blocklist::known_name;
use crate::model::{Platform, ProfileScanResult, ScanReport};
use crate::platform::{expected_roots, HomeDirs};
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

const SEPARATOR: &str = "=============================================================";

#[derive(Tabled)]
struct FlaggedRow {
    #[tabled(rename = "Browser")]
    browser: String,
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "Extension ID")]
    extension_id: String,
    #[tabled(rename = "Known As")]
    known_as: String,
    #[tabled(rename = "Path")]
    path: String,
}

/// Prints the scan banner before any filesystem work starts.
pub fn print_header(platform: Platform) {
    println!("🔍 Scanning browser extensions for ShadyPanda malware...");
    println!("Platform: {}", platform);
    println!("{}", SEPARATOR);
}

/// Prints the help text shown when no supported browser root exists.
pub fn print_no_browsers(platform: Platform, dirs: &HomeDirs) {
    println!("❌ No supported browsers found.");
    println!();
    println!("Supported browsers:");
    println!("  • Google Chrome");
    println!("  • Brave Browser");
    println!();
    println!("Make sure at least one of these browsers is installed and has been run.");
    println!();
    println!("Expected browser locations for your platform:");
    for (browser, root) in expected_roots(platform, dirs) {
        println!("  {:<7} {}", format!("{}:", browser), root.display());
    }
}

pub fn print_cli_report(report: &ScanReport) -> Result<()> {
    if report.profiles.is_empty() {
        println!("⚠️  No browser profiles found to scan.");
        return Ok(());
    }

    println!();
    println!(
        "Scan completed at: {}",
        report.scan_time.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
    println!("Scan Summary:");
    for (browser, count) in report.profiles_per_browser() {
        println!("  • {}: {} profile(s)", browser, count);
    }
    println!();
    println!("📊 Total profiles scanned: {}", report.profiles.len());
    println!("📦 Total extensions found: {}", report.total_installed());
    println!("🛡️  Malicious extensions checked: {}", report.blocklist_size);
    println!();

    if report.any_flagged() {
        print_flagged(report);
        print_removal_instructions();
    } else {
        print_clean();
    }

    Ok(())
}

fn print_flagged(report: &ScanReport) {
    println!("⚠️  ALERT: MALICIOUS EXTENSIONS DETECTED!");
    println!("{}", SEPARATOR);
    println!();

    let rows: Vec<FlaggedRow> = report
        .profiles
        .iter()
        .flat_map(|profile| profile.flagged.iter().map(move |id| flagged_row(profile, id)))
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!();
}

fn flagged_row(profile: &ProfileScanResult, id: &str) -> FlaggedRow {
    FlaggedRow {
        browser: profile.browser.display_name().to_string(),
        profile: profile.profile.clone(),
        extension_id: id.to_string(),
        known_as: known_name(id).unwrap_or("-").to_string(),
        path: profile.extension_path(id).display().to_string(),
    }
}

fn print_removal_instructions() {
    println!("⚡ RECOMMENDED ACTIONS:");
    println!("  1. Remove these extensions immediately from your browser");
    println!("  2. Go to chrome://extensions (Chrome) or brave://extensions (Brave)");
    println!("  3. Enable 'Developer mode' to see extension IDs");
    println!("  4. Remove any extensions matching the IDs above");
    println!("  5. Change your passwords across all accounts");
    println!("  6. Run a full antivirus scan");
    println!();
}

fn print_clean() {
    println!("✅ GOOD NEWS: No malicious extensions detected!");
    println!();
    println!("All scanned browser profiles appear to be clean from the");
    println!("ShadyPanda malware campaign extensions.");
    println!();
}
