//! TikTok Research API adapter.
//!
//! Single user-info call authorized by bearer token. All four counters map
//! directly; any the API omits default to zero.

use serde::Deserialize;

use crate::client::{build_url, StatsClient};
use crate::error::StatsError;
use crate::types::PlatformStats;

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    #[serde(default)]
    error: Option<ApiErrorBody>,
    #[serde(default)]
    data: Option<UserInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct UserInfo {
    #[serde(default)]
    follower_count: u64,
    #[serde(default)]
    heart_count: u64,
    #[serde(default)]
    video_view_count: u64,
    #[serde(default)]
    video_count: u64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Fetches user statistics for `username`.
///
/// # Errors
///
/// - [`StatsError::Api`] when the response carries an error envelope.
/// - [`StatsError::Http`] / [`StatsError::Deserialize`] on transport or
///   payload failures.
pub(crate) async fn fetch_user_stats(
    client: &StatsClient,
    access_token: &str,
    username: &str,
) -> Result<PlatformStats, StatsError> {
    let url = build_url(
        &client.endpoints.tiktok,
        "research/user/info/",
        &[("username", username)],
    )?;
    let response: UserInfoResponse = client
        .get_json(url, Some(access_token), "TikTok user info")
        .await?;

    if let Some(error) = response.error {
        return Err(StatsError::Api(error.message));
    }

    let info = response.data.unwrap_or_default();

    Ok(PlatformStats {
        followers: info.follower_count,
        likes: info.heart_count,
        views: info.video_view_count,
        posts: info.video_count,
    })
}
