//! Result schema for platform statistics collection.
//!
//! A fetch over N requested platforms always produces N outcomes: either a
//! normalized [`PlatformStats`] record or a [`PlatformOutcome::Error`] carrying
//! a human-readable message. The serialized shape matches what storefront
//! consumers persist per platform: a four-counter object or `{"error": "..."}`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The five platforms supported in API mode.
///
/// Identifiers are lowercase and matched exactly; [`Platform::from_id`]
/// returns `None` for anything else so the aggregator can report the platform
/// as unsupported instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Youtube,
    Instagram,
    Facebook,
    Tiktok,
    Pinterest,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Youtube,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Tiktok,
        Platform::Pinterest,
    ];

    /// Parses a platform identifier. Case-sensitive: only the canonical
    /// lowercase ids match.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "youtube" => Some(Platform::Youtube),
            "instagram" => Some(Platform::Instagram),
            "facebook" => Some(Platform::Facebook),
            "tiktok" => Some(Platform::Tiktok),
            "pinterest" => Some(Platform::Pinterest),
            _ => None,
        }
    }

    /// The canonical lowercase identifier used as the report key.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Tiktok => "tiktok",
            Platform::Pinterest => "pinterest",
        }
    }

    /// Human-facing platform name used in error messages.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Tiktok => "TikTok",
            Platform::Pinterest => "Pinterest",
        }
    }

    /// What kind of credential the platform expects, for "not configured"
    /// messages. YouTube authenticates with an API key, the rest with
    /// OAuth access tokens.
    #[must_use]
    pub fn credential_label(self) -> &'static str {
        match self {
            Platform::Youtube => "API key",
            Platform::Instagram
            | Platform::Facebook
            | Platform::Tiktok
            | Platform::Pinterest => "access token",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Normalized statistics for one platform account.
///
/// All counters are non-negative; `0` doubles as "this platform does not
/// expose the metric" (YouTube and Pinterest report no likes, Instagram no
/// followers, and so on). No field is ever omitted from the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub followers: u64,
    pub likes: u64,
    pub views: u64,
    pub posts: u64,
}

/// Stats or a terminal error for one requested platform.
///
/// Serializes untagged: the stats object and the `{"error": "..."}` envelope
/// are distinguished purely by shape. `PlatformStats` keeps all four fields
/// mandatory so an error envelope can never deserialize as stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlatformOutcome {
    Stats(PlatformStats),
    Error { error: String },
}

impl PlatformOutcome {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        PlatformOutcome::Error {
            error: message.into(),
        }
    }

    #[must_use]
    pub fn as_stats(&self) -> Option<&PlatformStats> {
        match self {
            PlatformOutcome::Stats(stats) => Some(stats),
            PlatformOutcome::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            PlatformOutcome::Stats(_) => None,
            PlatformOutcome::Error { error } => Some(error),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, PlatformOutcome::Error { .. })
    }
}

/// Per-platform API secrets. A `None` or blank slot means the platform is
/// not configured, which is a valid state reported per platform rather than
/// an error for the whole batch.
#[derive(Clone, Default)]
pub struct ApiCredentials {
    pub youtube_api_key: Option<String>,
    pub instagram_access_token: Option<String>,
    pub facebook_access_token: Option<String>,
    pub tiktok_access_token: Option<String>,
    pub pinterest_access_token: Option<String>,
}

impl ApiCredentials {
    /// The secret for a platform, treating blank values as unset.
    #[must_use]
    pub fn secret_for(&self, platform: Platform) -> Option<&str> {
        let slot = match platform {
            Platform::Youtube => &self.youtube_api_key,
            Platform::Instagram => &self.instagram_access_token,
            Platform::Facebook => &self.facebook_access_token,
            Platform::Tiktok => &self.tiktok_access_token,
            Platform::Pinterest => &self.pinterest_access_token,
        };
        slot.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Whether at least one platform has a usable secret.
    #[must_use]
    pub fn any_configured(&self) -> bool {
        Platform::ALL.iter().any(|p| self.secret_for(*p).is_some())
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "instagram_access_token",
                &self.instagram_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "facebook_access_token",
                &self.facebook_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "tiktok_access_token",
                &self.tiktok_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "pinterest_access_token",
                &self.pinterest_access_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

/// One platform account to fetch. The platform id stays a raw string here:
/// callers may configure accounts for platforms outside the supported set,
/// and those still get an entry in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    pub platform_id: String,
    pub profile_name: String,
}

impl ProfileRequest {
    #[must_use]
    pub fn new(platform_id: impl Into<String>, profile_name: impl Into<String>) -> Self {
        Self {
            platform_id: platform_id.into(),
            profile_name: profile_name.into(),
        }
    }
}

/// Aggregated fetch result: one outcome per requested platform id.
pub type StatsReport = HashMap<String, PlatformOutcome>;
