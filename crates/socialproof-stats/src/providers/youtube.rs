//! YouTube Data API v3 adapter.
//!
//! Two-step lookup: resolve a channel id by search query, then fetch the
//! channel's statistics. The API reports counters as decimal strings;
//! missing or malformed values count as zero. Total likes across uploads
//! are not exposed, so `likes` is always zero.

use serde::Deserialize;

use crate::client::{build_url, StatsClient};
use crate::error::StatsError;
use crate::types::PlatformStats;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
    channel_id: String,
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    statistics: ChannelStatistics,
}

/// Counter fields arrive as decimal strings (`"12345"`), not numbers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelStatistics {
    #[serde(default)]
    subscriber_count: Option<String>,
    #[serde(default)]
    view_count: Option<String>,
    #[serde(default)]
    video_count: Option<String>,
}

fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// Resolves `channel_name` to a channel id, then fetches its statistics.
///
/// # Errors
///
/// - [`StatsError::NotFound`] with `"Channel not found"` when the search
///   returns no items, or `"No statistics found"` when the channel listing
///   is empty. Both reach the caller without a platform prefix.
/// - [`StatsError::Http`] / [`StatsError::Deserialize`] on transport or
///   payload failures.
pub(crate) async fn fetch_channel_stats(
    client: &StatsClient,
    api_key: &str,
    channel_name: &str,
) -> Result<PlatformStats, StatsError> {
    let search_url = build_url(
        &client.endpoints.youtube,
        "search",
        &[
            ("part", "snippet"),
            ("type", "channel"),
            ("q", channel_name),
            ("key", api_key),
        ],
    )?;
    let search: SearchResponse = client
        .get_json(search_url, None, "YouTube channel search")
        .await?;

    let first = search
        .items
        .into_iter()
        .next()
        .ok_or_else(|| StatsError::NotFound("Channel not found".to_string()))?;
    let channel_id = first.snippet.channel_id;
    tracing::debug!(query = channel_name, channel_id = %channel_id, "resolved YouTube channel");

    let stats_url = build_url(
        &client.endpoints.youtube,
        "channels",
        &[("part", "statistics"), ("id", &channel_id), ("key", api_key)],
    )?;
    let channels: ChannelListResponse = client
        .get_json(stats_url, None, "YouTube channel statistics")
        .await?;

    let channel = channels
        .items
        .into_iter()
        .next()
        .ok_or_else(|| StatsError::NotFound("No statistics found".to_string()))?;
    let statistics = channel.statistics;

    Ok(PlatformStats {
        followers: parse_count(statistics.subscriber_count.as_deref()),
        likes: 0,
        views: parse_count(statistics.view_count.as_deref()),
        posts: parse_count(statistics.video_count.as_deref()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_reads_decimal_strings() {
        assert_eq!(parse_count(Some("12345")), 12_345);
    }

    #[test]
    fn parse_count_missing_is_zero() {
        assert_eq!(parse_count(None), 0);
    }

    #[test]
    fn parse_count_malformed_is_zero() {
        assert_eq!(parse_count(Some("not-a-number")), 0);
        assert_eq!(parse_count(Some("-5")), 0);
        assert_eq!(parse_count(Some("")), 0);
    }

    #[test]
    fn parse_count_tolerates_surrounding_whitespace() {
        assert_eq!(parse_count(Some(" 42 ")), 42);
    }
}
