//! Fetch command handler: one aggregation pass over the configured profiles.
//!
//! Per-platform failures are reported inside the result table (or JSON
//! document) rather than aborting the run; the command only exits nonzero
//! when every requested platform failed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use socialproof_core::AppConfig;
use socialproof_stats::{
    fetch_all_platform_stats, ApiCredentials, PlatformOutcome, ProfileRequest, StatsClient,
    StatsError, StatsReport,
};

/// Document printed by `fetch --json`: the per-platform outcomes plus the
/// capture timestamp.
#[derive(Debug, Serialize)]
struct SnapshotReport {
    fetched_at: DateTime<Utc>,
    results: StatsReport,
}

/// Build the shared HTTP client from app config.
pub(crate) fn build_stats_client(config: &AppConfig) -> Result<StatsClient, StatsError> {
    StatsClient::new(config.request_timeout_secs, &config.user_agent)
}

/// Map the configured credential slots into the fetcher's credential set.
pub(crate) fn credentials_from_config(config: &AppConfig) -> ApiCredentials {
    ApiCredentials {
        youtube_api_key: config.youtube_api_key.clone(),
        instagram_access_token: config.instagram_access_token.clone(),
        facebook_access_token: config.facebook_access_token.clone(),
        tiktok_access_token: config.tiktok_access_token.clone(),
        pinterest_access_token: config.pinterest_access_token.clone(),
    }
}

/// Fetch statistics for all active profiles and print the outcomes.
///
/// With `--platform` only the matching profile is fetched. With `--json` the
/// report is printed as a single JSON document and nothing else goes to
/// stdout, so output can be piped into other tools.
///
/// # Errors
///
/// Returns an error if configuration or profiles cannot be loaded, the HTTP
/// client cannot be constructed, or every requested platform failed.
pub(crate) async fn run_fetch(
    config: &AppConfig,
    platform_filter: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let profiles = socialproof_core::load_profiles(&config.profiles_path)?;

    let requests: Vec<ProfileRequest> = profiles
        .active_profiles()
        .into_iter()
        .filter(|p| platform_filter.is_none_or(|f| p.platform == f))
        .map(|p| ProfileRequest::new(p.platform.clone(), p.profile_name.clone()))
        .collect();

    if requests.is_empty() {
        match platform_filter {
            Some(f) => println!("no active profile configured for platform '{f}'"),
            None => println!(
                "no active profiles found in {}; nothing to fetch",
                config.profiles_path.display()
            ),
        }
        return Ok(());
    }

    let client = build_stats_client(config)?;
    let credentials = credentials_from_config(config);
    if !credentials.any_configured() {
        tracing::warn!("no platform credentials configured; every platform will report an error");
    }

    let report = fetch_all_platform_stats(&client, &credentials, &requests).await;

    let total = report.len();
    let failed = report.values().filter(|o| o.is_error()).count();

    if json {
        let snapshot = SnapshotReport {
            fetched_at: Utc::now(),
            results: report,
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_report(&requests, &report);
    }

    if failed > 0 {
        tracing::warn!(failed, total, "some platforms failed during fetch");
    }
    if failed == total {
        anyhow::bail!("all {failed} platforms failed to fetch");
    }

    if !json {
        println!();
        println!("fetched {} of {total} platforms", total - failed);
    }
    Ok(())
}

/// Print the report as a fixed-width table, one row per requested platform,
/// in request order.
fn print_report(requests: &[ProfileRequest], report: &StatsReport) {
    let header = format!(
        "{:<12}{:<26}{:>10}{:>10}{:>12}{:>8}  STATUS",
        "PLATFORM", "PROFILE", "FOLLOWERS", "LIKES", "VIEWS", "POSTS"
    );
    println!("{header}");
    for request in requests {
        let Some(outcome) = report.get(&request.platform_id) else {
            continue;
        };
        match outcome {
            PlatformOutcome::Stats(stats) => println!(
                "{:<12}{:<26}{:>10}{:>10}{:>12}{:>8}  ok",
                request.platform_id,
                request.profile_name,
                stats.followers,
                stats.likes,
                stats.views,
                stats.posts
            ),
            PlatformOutcome::Error { error } => println!(
                "{:<12}{:<26}{:>10}{:>10}{:>12}{:>8}  {error}",
                request.platform_id,
                request.profile_name,
                "\u{2014}",
                "\u{2014}",
                "\u{2014}",
                "\u{2014}"
            ),
        }
    }
}
