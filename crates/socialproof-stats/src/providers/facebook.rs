//! Facebook Graph API adapter.
//!
//! Reads follower and fan counts for a page. `followers` takes a nonzero
//! `fan_count` first and falls back to `followers_count`, since pages
//! migrated to the new Page experience report one or the other (a zero
//! `fan_count` falls through too). Post and like totals would need extra
//! per-post calls, so both stay zero.

use serde::Deserialize;

use crate::client::{build_url_with_segment, StatsClient};
use crate::error::StatsError;
use crate::types::PlatformStats;

#[derive(Debug, Deserialize)]
struct PageResponse {
    #[serde(default)]
    error: Option<ApiErrorBody>,
    #[serde(default)]
    followers_count: Option<u64>,
    #[serde(default)]
    fan_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Fetches follower counts for `page_id`.
///
/// The page id is pushed as a URL path segment so arbitrary configured
/// values cannot alter the request path.
///
/// # Errors
///
/// - [`StatsError::Api`] when the response carries an error envelope.
/// - [`StatsError::Http`] / [`StatsError::Deserialize`] on transport or
///   payload failures.
pub(crate) async fn fetch_page_stats(
    client: &StatsClient,
    access_token: &str,
    page_id: &str,
) -> Result<PlatformStats, StatsError> {
    let url = build_url_with_segment(
        &client.endpoints.facebook,
        page_id,
        &[
            ("fields", "followers_count,fan_count"),
            ("access_token", access_token),
        ],
    )?;
    let page: PageResponse = client.get_json(url, None, "Facebook page metadata").await?;

    if let Some(error) = page.error {
        return Err(StatsError::Api(error.message));
    }

    Ok(PlatformStats {
        followers: page
            .fan_count
            .filter(|&n| n > 0)
            .or(page.followers_count)
            .unwrap_or(0),
        likes: 0,
        views: 0,
        posts: 0,
    })
}
