// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use ytsync::{
    NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter, SyncOptions,
    VideoApi, YouTubeClient, load_config, sync_channel,
};

// Emoji with fallback for terminals without Unicode support
static CLAPPER: Emoji<'_, '_> = Emoji("🎬 ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HISTORY: Emoji<'_, '_> = Emoji("📜 ", "[i] ");
static PLAN: Emoji<'_, '_> = Emoji("📋 ", "[i] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[?] ");
static COMMIT: Emoji<'_, '_> = Emoji("📦 ", "[c] ");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "[*] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "x ");

/// Sync a YouTube channel into Markdown episode pages
#[derive(Parser, Debug)]
#[command(name = "ytsync")]
#[command(about = "Sync YouTube channel videos into Markdown episode pages")]
#[command(version)]
struct Args {
    /// Ignore the last sync time and fetch the whole catalog
    #[arg(long)]
    full: bool,

    /// Preview changes without writing files or committing
    #[arg(long)]
    dry_run: bool,

    /// Write episode files but skip the git commit
    #[arg(long)]
    no_commit: bool,

    /// Maximum number of episodes to sync
    #[arg(short, long)]
    max: Option<usize>,

    /// Only sync videos published after this date (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_start_date)]
    after: Option<DateTime<Utc>>,

    /// Only sync videos published on or before this date (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_end_date)]
    before: Option<DateTime<Utc>>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the site repository
    #[arg(short, long, default_value = ".")]
    repo: PathBuf,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Check that the configured channel exists, then exit
    #[arg(long)]
    verify_channel: bool,
}

/// Parse a date bound; a bare date means the start of that day
fn parse_start_date(value: &str) -> Result<DateTime<Utc>, String> {
    parse_date(value, false)
}

/// Parse a date bound; a bare date means the end of that day
fn parse_end_date(value: &str) -> Result<DateTime<Utc>, String> {
    parse_date(value, true)
}

fn parse_date(value: &str, end_of_day: bool) -> Result<DateTime<Utc>, String> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.to_utc());
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("expected an RFC 3339 timestamp or YYYY-MM-DD, got '{value}'"))?;
    let time = if end_of_day {
        date.and_hms_opt(23, 59, 59)
    } else {
        date.and_hms_opt(0, 0, 0)
    };
    time.map(|t| t.and_utc())
        .ok_or_else(|| format!("invalid date '{value}'"))
}

/// Progress reporter using indicatif for terminal output
struct IndicatifReporter {
    main_bar: ProgressBar,
}

impl IndicatifReporter {
    fn new() -> Self {
        let main_style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let main_bar = ProgressBar::new_spinner();
        main_bar.set_style(main_style);
        main_bar.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { main_bar }
    }
}

impl ProgressReporter for IndicatifReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::ScanningHistory { episode_directory } => {
                let directory = if episode_directory.is_empty() {
                    "."
                } else {
                    episode_directory.as_str()
                };
                self.main_bar.set_message(format!(
                    "{HISTORY}Reading git history of {}",
                    directory.cyan()
                ));
            }

            ProgressEvent::HistoryRecordSkipped {
                path,
                commit,
                error,
            } => {
                self.main_bar.println(format!(
                    "  {WARNING}Skipped {} at {}: {}",
                    path.yellow(),
                    commit.chars().take(7).collect::<String>(),
                    error.dimmed()
                ));
            }

            ProgressEvent::HistoryUnavailable { error } => {
                self.main_bar.println(format!(
                    "  {WARNING}Git history unavailable, starting fresh: {}",
                    error.dimmed()
                ));
            }

            ProgressEvent::HistoryScanned {
                episode_count,
                last_sync,
            } => {
                let last_sync = last_sync
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "never".to_string());
                self.main_bar.println(format!(
                    "{HISTORY}{} existing episode(s), last sync: {}",
                    episode_count.to_string().cyan(),
                    last_sync.cyan()
                ));
            }

            ProgressEvent::FetchingPage {
                page,
                published_after,
            } => {
                let since = published_after
                    .map(|t| format!(" since {}", t.format("%Y-%m-%d")))
                    .unwrap_or_default();
                self.main_bar.set_message(format!(
                    "{SEARCH}Fetching videos{since}, page {}",
                    page.to_string().cyan()
                ));
            }

            ProgressEvent::PageFetched { page, videos } => {
                self.main_bar.set_message(format!(
                    "{SEARCH}Page {}: {} video(s)",
                    page.to_string().cyan(),
                    videos.to_string().cyan()
                ));
            }

            ProgressEvent::RetryScheduled {
                attempt,
                max_retries,
                delay,
                error,
            } => {
                self.main_bar.println(format!(
                    "  {WARNING}{} Retrying in {}s ({}/{})",
                    error.yellow(),
                    delay.as_secs(),
                    attempt,
                    max_retries
                ));
            }

            ProgressEvent::VideoExcluded { video_id } => {
                self.main_bar
                    .println(format!("  {CROSS}Excluded {}", video_id.dimmed()));
            }

            ProgressEvent::SyncPlanReady {
                fetched,
                already_synced,
                to_sync,
            } => {
                self.main_bar.println(format!(
                    "{PLAN}{} fetched, {} already synced, {} to sync",
                    fetched.to_string().cyan(),
                    already_synced.to_string().yellow(),
                    to_sync.to_string().green().bold()
                ));
            }

            ProgressEvent::EpisodeGenerated {
                episode_number,
                title,
                path,
            } => {
                self.main_bar.println(format!(
                    "  {SUCCESS}Episode {}: {} {}",
                    episode_number.to_string().bold(),
                    truncate_title(&title, 50).green(),
                    path.display().to_string().dimmed()
                ));
            }

            ProgressEvent::EpisodeFailed {
                episode_number,
                video_id,
                error,
            } => {
                self.main_bar.println(format!(
                    "  {FAILURE}Episode {} ({}): {}",
                    episode_number.to_string().bold(),
                    video_id.yellow(),
                    error.red()
                ));
            }

            ProgressEvent::Committed {
                commit_id,
                episode_count,
            } => {
                self.main_bar.println(format!(
                    "{COMMIT}Committed {} episode(s): {}",
                    episode_count.to_string().green(),
                    commit_id.chars().take(7).collect::<String>().cyan()
                ));
            }

            ProgressEvent::CommitFailed { error } => {
                self.main_bar.println(format!(
                    "{FAILURE}{} {}",
                    "Git commit failed:".red().bold(),
                    error.red()
                ));
            }

            ProgressEvent::SyncCompleted {
                synced_count,
                skipped_count,
                failed_count,
                dry_run,
            } => {
                self.main_bar.finish_and_clear();
                println!(
                    "\n{PARTY}{} {} synced, {} skipped, {} failed{}",
                    "Sync complete:".bold().green(),
                    synced_count.to_string().green().bold(),
                    skipped_count.to_string().yellow(),
                    if failed_count > 0 {
                        failed_count.to_string().red().bold()
                    } else {
                        failed_count.to_string().green()
                    },
                    if dry_run { " (dry run)" } else { "" }
                );
            }
        }
    }
}

fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        title.to_string()
    } else {
        let head: String = title.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

async fn verify_channel(client: &YouTubeClient, channel_id: &str) -> Result<()> {
    let response = client
        .verify_channel(channel_id)
        .await
        .with_context(|| format!("Failed to verify channel {channel_id}"))?;

    for channel in response.items {
        let title = channel
            .snippet
            .and_then(|snippet| snippet.title)
            .unwrap_or_else(|| "(untitled)".to_string());
        println!(
            "{SUCCESS}{} {}",
            title.bold().green(),
            channel.id.dimmed()
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            CLAPPER,
            "ytsync".bold().magenta(),
            "- YouTube Episode Sync".dimmed()
        );
    }

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    let client = YouTubeClient::new(config.youtube_api_key.clone());

    if args.verify_channel {
        return verify_channel(&client, &config.channel_id).await;
    }

    let options = SyncOptions {
        full_sync: args.full,
        dry_run: args.dry_run,
        no_commit: args.no_commit,
        limit: args.max,
        after: args.after,
        before: args.before,
    };

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(IndicatifReporter::new())
    };

    let result = sync_channel(&client, &args.repo, &config, &options, reporter)
        .await
        .context("Failed to sync channel")?;

    if !args.quiet && !result.failed.is_empty() {
        println!("\n{}", "Failed episodes:".red().bold());
        for failure in &result.failed {
            println!(
                "  {}{} - {}",
                CROSS,
                failure.video_id.yellow(),
                failure.error.dimmed()
            );
        }
    }

    if !args.quiet {
        if let Some(warning) = &result.commit_warning {
            println!(
                "\n{WARNING}Files were written but not committed ({}). Commit them manually.",
                warning.yellow()
            );
        }
        if result.dry_run {
            println!("\n{}", "[DRY RUN] No files were written or committed.".dimmed());
        }
        println!();
    }

    if result.all_failed() {
        std::process::exit(1);
    }

    Ok(())
}
