//! Instagram Basic Display API adapter.
//!
//! The access token scopes the account, so the configured profile name is
//! accepted for dispatch symmetry but never sent. `likes` sums the first
//! page of media only; an error envelope on the media call degrades to zero
//! likes instead of failing the platform. Follower and view counts need
//! Graph API permissions this integration does not hold, so both are zero.

use serde::Deserialize;

use crate::client::{build_url, StatsClient};
use crate::error::StatsError;
use crate::types::PlatformStats;

#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(default)]
    error: Option<ApiErrorBody>,
    #[serde(default)]
    media_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct MediaListResponse {
    #[serde(default)]
    data: Vec<MediaItem>,
}

#[derive(Debug, Deserialize)]
struct MediaItem {
    #[serde(default)]
    like_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Fetches account stats for the token's own account.
///
/// # Errors
///
/// - [`StatsError::Api`] when the account lookup carries an error envelope.
/// - [`StatsError::Http`] / [`StatsError::Deserialize`] on transport or
///   payload failures of either call.
pub(crate) async fn fetch_account_stats(
    client: &StatsClient,
    access_token: &str,
    _username: &str,
) -> Result<PlatformStats, StatsError> {
    let account_url = build_url(
        &client.endpoints.instagram,
        "me",
        &[
            ("fields", "account_type,media_count"),
            ("access_token", access_token),
        ],
    )?;
    let account: AccountResponse = client
        .get_json(account_url, None, "Instagram account profile")
        .await?;

    if let Some(error) = account.error {
        return Err(StatsError::Api(error.message));
    }

    let media_url = build_url(
        &client.endpoints.instagram,
        "me/media",
        &[("fields", "like_count"), ("access_token", access_token)],
    )?;
    let media: MediaListResponse = client
        .get_json(media_url, None, "Instagram media list")
        .await?;

    // An error envelope here deserializes with an empty `data` list, which
    // sums to zero likes.
    let likes = media
        .data
        .iter()
        .map(|item| item.like_count.unwrap_or(0))
        .sum();

    Ok(PlatformStats {
        followers: 0,
        likes,
        views: 0,
        posts: account.media_count.unwrap_or(0),
    })
}
