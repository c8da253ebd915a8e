//! Social media statistics collection for storefront social proof.
//!
//! Fetches follower/like/view/post counts from five platform APIs (YouTube,
//! Instagram, Facebook, TikTok, Pinterest), normalizes each response into a
//! common [`PlatformStats`] record, and aggregates per-platform outcomes into
//! a single report where individual failures never abort the batch.

pub mod aggregate;
pub mod client;
pub mod error;
pub mod types;

mod providers;

pub use aggregate::fetch_all_platform_stats;
pub use client::{ProviderEndpoints, StatsClient};
pub use error::StatsError;
pub use types::{
    ApiCredentials, Platform, PlatformOutcome, PlatformStats, ProfileRequest, StatsReport,
};
