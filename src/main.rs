use anyhow::Result;
use clap::Parser;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use pandascan::{
    blocklist::Blocklist,
    model::{Browser, BrowserInstall, ProfileScanResult, ScanReport},
    output::{print_header, print_no_browsers, print_report, OutputFormat},
    platform::{current_platform, discover_browsers_in, HomeDirs},
    scanner::get_scanner,
};
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Exit codes for CI integration
mod exit_codes {
    /// Clean scan, or no supported browser installed.
    pub const CLEAN: u8 = 0;
    /// At least one blocklisted extension was found.
    pub const INFECTED: u8 = 1;
    /// Unrecoverable error before any scanning could happen.
    pub const ERROR: u8 = 1;
}

#[derive(Parser)]
#[command(name = "pandascan")]
#[command(
    author,
    version,
    about = "Scan Chrome and Brave profiles for ShadyPanda malware extensions"
)]
struct Cli {
    /// Only scan one browser (chrome, brave)
    #[arg(short, long)]
    browser: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    format: String,

    /// Disable concurrent scanning (scan browsers sequentially)
    #[arg(long)]
    no_parallel: bool,

    /// Suppress the banner and progress spinner
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

async fn run() -> Result<u8> {
    let cli = Cli::parse();
    let format = OutputFormat::from_str(&cli.format).map_err(|e| anyhow::anyhow!(e))?;
    let is_interactive = format == OutputFormat::Table && !cli.quiet;

    // Fatal: without a platform and a home directory no browser path can
    // be computed.
    let platform = current_platform()?;
    let dirs = HomeDirs::resolve()?;

    if is_interactive {
        print_header(platform);
    }

    let blocklist = Blocklist::default();

    let mut installs = discover_browsers_in(platform, &dirs);
    if let Some(name) = &cli.browser {
        let wanted = parse_browser(name)?;
        installs.retain(|i| i.browser == wanted);
    }

    if installs.is_empty() {
        match format {
            OutputFormat::Table => print_no_browsers(platform, &dirs),
            OutputFormat::Json => {
                print_report(&ScanReport::new(platform, blocklist.len(), vec![]), format)?
            }
        }
        return Ok(exit_codes::CLEAN);
    }

    let profiles = if cli.no_parallel || installs.len() < 2 {
        scan_sequential(&installs, &blocklist, is_interactive).await
    } else {
        scan_concurrent(&installs, &blocklist, is_interactive).await
    };

    let report = ScanReport::new(platform, blocklist.len(), profiles);
    print_report(&report, format)?;

    if report.any_flagged() {
        Ok(exit_codes::INFECTED)
    } else {
        Ok(exit_codes::CLEAN)
    }
}

/// Scan all discovered browsers concurrently using tokio tasks.
///
/// `join_all` preserves input order, so the aggregate keeps browser
/// discovery order followed by profile discovery order.
async fn scan_concurrent(
    installs: &[BrowserInstall],
    blocklist: &Blocklist,
    is_interactive: bool,
) -> Vec<ProfileScanResult> {
    let progress = if is_interactive {
        let pb = ProgressBar::new(installs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} Scanning browsers...")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(Arc::new(pb))
    } else {
        None
    };

    let futures: Vec<_> = installs
        .iter()
        .map(|install| {
            let pb = progress.clone();
            async move {
                let result = scan_one(install, blocklist).await;
                if let Some(ref pb) = pb {
                    pb.inc(1);
                }
                result
            }
        })
        .collect();

    let results = join_all(futures).await;

    if let Some(pb) = progress {
        let total: usize = results.iter().map(|r| r.len()).sum();
        pb.finish_with_message(format!("Scanned {} profiles", total));
    }

    results.into_iter().flatten().collect()
}

/// Scan browsers one at a time, in discovery order.
async fn scan_sequential(
    installs: &[BrowserInstall],
    blocklist: &Blocklist,
    is_interactive: bool,
) -> Vec<ProfileScanResult> {
    let mut all_profiles = Vec::new();

    let progress = if is_interactive {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    for install in installs {
        if let Some(ref pb) = progress {
            pb.set_message(format!("Scanning {}...", install.browser));
        }
        all_profiles.extend(scan_one(install, blocklist).await);
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    all_profiles
}

/// Scan a single browser, downgrading failure to an empty result so one
/// unreadable browser root never aborts the scan of the others.
async fn scan_one(install: &BrowserInstall, blocklist: &Blocklist) -> Vec<ProfileScanResult> {
    let scanner = get_scanner(install.browser);
    match scanner.scan(&install.root, blocklist).await {
        Ok(profiles) => profiles,
        Err(e) => {
            warn!(browser = install.browser.as_str(), error = %e, "browser scan failed, skipping");
            Vec::new()
        }
    }
}

fn parse_browser(s: &str) -> Result<Browser> {
    match s.to_lowercase().as_str() {
        "chrome" => Ok(Browser::Chrome),
        "brave" => Ok(Browser::Brave),
        _ => Err(anyhow::anyhow!(
            "Unknown browser: {}. Use: chrome, brave",
            s
        )),
    }
}
