//! Per-platform fetch adapters.
//!
//! Each module owns its provider's response shapes and quirks; nothing about
//! one platform's payload leaks into another's. All adapters share the
//! [`StatsClient`] pool and normalize into the common [`PlatformStats`]
//! record, reporting metrics their platform cannot supply as zero.

mod facebook;
mod instagram;
mod pinterest;
mod tiktok;
mod youtube;

use crate::client::StatsClient;
use crate::error::StatsError;
use crate::types::{Platform, PlatformStats};

/// Dispatches one fetch to the adapter for `platform`.
pub(crate) async fn fetch_platform_stats(
    client: &StatsClient,
    platform: Platform,
    secret: &str,
    profile_name: &str,
) -> Result<PlatformStats, StatsError> {
    match platform {
        Platform::Youtube => youtube::fetch_channel_stats(client, secret, profile_name).await,
        Platform::Instagram => instagram::fetch_account_stats(client, secret, profile_name).await,
        Platform::Facebook => facebook::fetch_page_stats(client, secret, profile_name).await,
        Platform::Tiktok => tiktok::fetch_user_stats(client, secret, profile_name).await,
        Platform::Pinterest => pinterest::fetch_account_stats(client, secret, profile_name).await,
    }
}
