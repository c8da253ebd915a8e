//! Shared HTTP plumbing for the provider adapters.
//!
//! One pooled `reqwest::Client` serves all five platforms; per-provider base
//! URLs live in [`ProviderEndpoints`] so tests can point any platform at a
//! mock server. Responses are parsed as JSON without gating on HTTP status:
//! the Graph-style APIs return their real error message in the body of
//! non-2xx responses, and callers inspect that envelope instead.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::StatsError;

/// Base URLs for the five provider APIs. Defaults point at production;
/// override individual fields to test against a local server.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub youtube: String,
    pub instagram: String,
    pub facebook: String,
    pub tiktok: String,
    pub pinterest: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            youtube: "https://www.googleapis.com/youtube/v3".to_string(),
            instagram: "https://graph.instagram.com".to_string(),
            facebook: "https://graph.facebook.com/v18.0".to_string(),
            tiktok: "https://open.tiktokapis.com/v2".to_string(),
            pinterest: "https://api.pinterest.com/v5".to_string(),
        }
    }
}

/// HTTP client shared by all provider adapters.
///
/// Use [`StatsClient::new`] for production or [`StatsClient::with_endpoints`]
/// to substitute mock base URLs in tests. The configured timeout bounds every
/// request so one unresponsive provider cannot stall a whole fetch.
pub struct StatsClient {
    pub(crate) http: Client,
    pub(crate) endpoints: ProviderEndpoints,
}

impl StatsClient {
    /// Creates a client pointed at the production provider APIs.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, StatsError> {
        Self::with_endpoints(timeout_secs, user_agent, ProviderEndpoints::default())
    }

    /// Creates a client with custom base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_endpoints(
        timeout_secs: u64,
        user_agent: &str,
        endpoints: ProviderEndpoints,
    ) -> Result<Self, StatsError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { http, endpoints })
    }

    /// Sends a GET request and parses the body as JSON regardless of status.
    ///
    /// `context` describes the request for error messages; it must never
    /// include the URL, whose query string carries credentials for three of
    /// the five providers. Transport errors are stripped of their URL before
    /// wrapping for the same reason.
    ///
    /// # Errors
    ///
    /// - [`StatsError::Http`] on connection failure or timeout, with the
    ///   request URL removed.
    /// - [`StatsError::Deserialize`] if the body is not JSON of the expected
    ///   shape.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        bearer_token: Option<&str>,
        context: &str,
    ) -> Result<T, StatsError> {
        let mut request = self.http.get(url);
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }
        // reqwest errors embed the full request URL; strip it before
        // wrapping, since query strings carry credentials for three of the
        // five providers.
        let response = request
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| StatsError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

/// Builds a request URL from a base, a fixed path suffix, and query pairs.
///
/// The path is joined verbatim (it may carry a trailing slash, which TikTok's
/// endpoint requires); query values are percent-encoded via
/// [`Url::query_pairs_mut`].
pub(crate) fn build_url(
    base: &str,
    path: &str,
    query: &[(&str, &str)],
) -> Result<Url, StatsError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path);
    let mut url = Url::parse(&joined).map_err(|e| StatsError::InvalidEndpoint {
        endpoint: joined.clone(),
        reason: e.to_string(),
    })?;
    append_query(&mut url, query);
    Ok(url)
}

/// Variant of [`build_url`] for caller-supplied path segments (the Facebook
/// page id). The segment goes through [`Url::path_segments_mut`] so it is
/// percent-encoded rather than interpreted as path structure.
pub(crate) fn build_url_with_segment(
    base: &str,
    segment: &str,
    query: &[(&str, &str)],
) -> Result<Url, StatsError> {
    let mut url = Url::parse(base).map_err(|e| StatsError::InvalidEndpoint {
        endpoint: base.to_string(),
        reason: e.to_string(),
    })?;
    url.path_segments_mut()
        .map_err(|()| StatsError::InvalidEndpoint {
            endpoint: base.to_string(),
            reason: "cannot be a base URL".to_string(),
        })?
        .pop_if_empty()
        .push(segment);
    append_query(&mut url, query);
    Ok(url)
}

/// Appends query pairs, skipping the serializer entirely when there are none:
/// an empty `query_pairs_mut` pass would leave a dangling `?` on the URL.
fn append_query(url: &mut Url, query: &[(&str, &str)]) {
    if query.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (key, value) in query {
        pairs.append_pair(key, value);
    }
}
