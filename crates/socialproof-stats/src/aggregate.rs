//! Sequential aggregation over requested platforms.
//!
//! One pass visits every requested platform in order, never letting a single
//! platform's failure or missing credential abort the rest. The returned
//! report carries exactly one outcome per requested platform id, so partial
//! success is an ordinary result rather than an error.

use crate::client::StatsClient;
use crate::error::StatsError;
use crate::providers;
use crate::types::{ApiCredentials, Platform, PlatformOutcome, ProfileRequest, StatsReport};

const UNSUPPORTED_PLATFORM_MESSAGE: &str = "Platform not supported for API mode";

/// Fetches statistics for every requested platform, sequentially and in
/// request order.
///
/// Unsupported platform ids and unconfigured credential slots become error
/// outcomes without any network traffic. Adapter failures are rendered as
/// `"<Platform> API error: ..."`, except the YouTube lookup misses, which
/// pass through verbatim.
pub async fn fetch_all_platform_stats(
    client: &StatsClient,
    credentials: &ApiCredentials,
    requests: &[ProfileRequest],
) -> StatsReport {
    let mut results = StatsReport::with_capacity(requests.len());

    for request in requests {
        let outcome = fetch_platform(client, credentials, request).await;
        results.insert(request.platform_id.clone(), outcome);
    }

    results
}

async fn fetch_platform(
    client: &StatsClient,
    credentials: &ApiCredentials,
    request: &ProfileRequest,
) -> PlatformOutcome {
    let Some(platform) = Platform::from_id(&request.platform_id) else {
        tracing::warn!(
            platform = %request.platform_id,
            "platform not supported for API mode"
        );
        return PlatformOutcome::error(UNSUPPORTED_PLATFORM_MESSAGE);
    };

    let Some(secret) = credentials.secret_for(platform) else {
        tracing::debug!(platform = %platform, "credential not configured; skipping fetch");
        return PlatformOutcome::error(format!(
            "{} {} not configured",
            platform.display_name(),
            platform.credential_label()
        ));
    };

    match providers::fetch_platform_stats(client, platform, secret, &request.profile_name).await {
        Ok(stats) => {
            tracing::debug!(
                platform = %platform,
                followers = stats.followers,
                likes = stats.likes,
                views = stats.views,
                posts = stats.posts,
                "collected platform stats"
            );
            PlatformOutcome::Stats(stats)
        }
        Err(e) => {
            tracing::warn!(platform = %platform, error = %e, "platform stats fetch failed");
            PlatformOutcome::error(outcome_message(platform, &e))
        }
    }
}

/// Renders an adapter error as the per-platform outcome message.
fn outcome_message(platform: Platform, error: &StatsError) -> String {
    match error {
        StatsError::NotFound(message) => message.clone(),
        other => format!("{} API error: {other}", platform.display_name()),
    }
}
