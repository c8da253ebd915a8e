//! Pinterest API v5 adapter.
//!
//! Single user-account call authorized by bearer token. Pinterest exposes no
//! like counter, so `likes` is always zero; `views` carries the rolling
//! monthly view count.

use serde::Deserialize;

use crate::client::{build_url, StatsClient};
use crate::error::StatsError;
use crate::types::PlatformStats;

#[derive(Debug, Deserialize)]
struct UserAccountResponse {
    #[serde(default)]
    error: Option<ApiErrorBody>,
    #[serde(default)]
    follower_count: u64,
    #[serde(default)]
    monthly_views: u64,
    #[serde(default)]
    pin_count: u64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Fetches account statistics for `username`.
///
/// # Errors
///
/// - [`StatsError::Api`] when the response carries an error envelope.
/// - [`StatsError::Http`] / [`StatsError::Deserialize`] on transport or
///   payload failures.
pub(crate) async fn fetch_account_stats(
    client: &StatsClient,
    access_token: &str,
    username: &str,
) -> Result<PlatformStats, StatsError> {
    let url = build_url(
        &client.endpoints.pinterest,
        "user_account",
        &[("ad_account_id", username)],
    )?;
    let account: UserAccountResponse = client
        .get_json(url, Some(access_token), "Pinterest user account")
        .await?;

    if let Some(error) = account.error {
        return Err(StatsError::Api(error.message));
    }

    Ok(PlatformStats {
        followers: account.follower_count,
        likes: 0,
        views: account.monthly_views,
        posts: account.pin_count,
    })
}
