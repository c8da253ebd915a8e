//! Integration tests for the aggregation pass: one outcome per requested
//! platform, credential gating before any network traffic, and isolation of
//! per-platform failures.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use socialproof_stats::{
    fetch_all_platform_stats, ApiCredentials, ProfileRequest, ProviderEndpoints, StatsClient,
};

fn test_client(server_uri: &str) -> StatsClient {
    test_client_with_timeout(server_uri, 5)
}

fn test_client_with_timeout(server_uri: &str, timeout_secs: u64) -> StatsClient {
    let endpoints = ProviderEndpoints {
        youtube: server_uri.to_string(),
        instagram: server_uri.to_string(),
        facebook: server_uri.to_string(),
        tiktok: server_uri.to_string(),
        pinterest: server_uri.to_string(),
    };
    StatsClient::with_endpoints(timeout_secs, "socialproof-test/0.1", endpoints)
        .expect("failed to build test StatsClient")
}

/// Mounts a catch-all mock that fails the test if any request reaches the
/// server.
async fn forbid_all_traffic(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Report shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn report_has_exactly_one_entry_per_requested_platform() {
    let server = MockServer::start().await;
    forbid_all_traffic(&server).await;

    let client = test_client(&server.uri());
    let requests = vec![
        ProfileRequest::new("youtube", "Acme Outfitters"),
        ProfileRequest::new("instagram", "acmeoutfitters"),
        ProfileRequest::new("facebook", "acme-page"),
        ProfileRequest::new("tiktok", "acmehandle"),
        ProfileRequest::new("pinterest", "acme-pins"),
        ProfileRequest::new("myspace", "acme"),
    ];

    // No credentials configured, so every platform resolves without traffic.
    let report =
        fetch_all_platform_stats(&client, &ApiCredentials::default(), &requests).await;

    assert_eq!(report.len(), requests.len(), "report: {report:?}");
    for request in &requests {
        assert!(
            report.contains_key(&request.platform_id),
            "missing outcome for '{}' in report: {report:?}",
            request.platform_id
        );
    }
}

#[tokio::test]
async fn empty_request_list_returns_empty_report() {
    let server = MockServer::start().await;
    forbid_all_traffic(&server).await;

    let client = test_client(&server.uri());
    let report = fetch_all_platform_stats(&client, &ApiCredentials::default(), &[]).await;

    assert!(report.is_empty(), "report: {report:?}");
}

#[tokio::test]
async fn duplicate_platform_requests_collapse_to_one_entry() {
    let server = MockServer::start().await;
    forbid_all_traffic(&server).await;

    let client = test_client(&server.uri());
    let requests = vec![
        ProfileRequest::new("youtube", "Acme Outfitters"),
        ProfileRequest::new("youtube", "Acme Outlet"),
    ];

    let report =
        fetch_all_platform_stats(&client, &ApiCredentials::default(), &requests).await;

    assert_eq!(report.len(), 1, "report: {report:?}");
    assert!(report.contains_key("youtube"));
}

// ---------------------------------------------------------------------------
// Pre-dispatch gating
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unsupported_platform_reports_error_without_network() {
    let server = MockServer::start().await;
    forbid_all_traffic(&server).await;

    let client = test_client(&server.uri());
    let credentials = ApiCredentials {
        youtube_api_key: Some("yt-key".to_string()),
        ..ApiCredentials::default()
    };
    let requests = vec![ProfileRequest::new("twitter", "acme")];

    let report = fetch_all_platform_stats(&client, &credentials, &requests).await;

    let outcome = report.get("twitter").expect("missing outcome for twitter");
    assert_eq!(
        outcome.error_message(),
        Some("Platform not supported for API mode")
    );
}

#[tokio::test]
async fn platform_ids_are_matched_case_sensitively() {
    let server = MockServer::start().await;
    forbid_all_traffic(&server).await;

    let client = test_client(&server.uri());
    let requests = vec![ProfileRequest::new("YouTube", "Acme Outfitters")];

    let report =
        fetch_all_platform_stats(&client, &ApiCredentials::default(), &requests).await;

    let outcome = report.get("YouTube").expect("missing outcome for YouTube");
    assert_eq!(
        outcome.error_message(),
        Some("Platform not supported for API mode")
    );
}

#[tokio::test]
async fn missing_credentials_report_per_platform_messages() {
    let server = MockServer::start().await;
    forbid_all_traffic(&server).await;

    let client = test_client(&server.uri());
    let requests = vec![
        ProfileRequest::new("youtube", "Acme Outfitters"),
        ProfileRequest::new("instagram", "acmeoutfitters"),
        ProfileRequest::new("facebook", "acme-page"),
        ProfileRequest::new("tiktok", "acmehandle"),
        ProfileRequest::new("pinterest", "acme-pins"),
    ];

    let report =
        fetch_all_platform_stats(&client, &ApiCredentials::default(), &requests).await;

    let expected = [
        ("youtube", "YouTube API key not configured"),
        ("instagram", "Instagram access token not configured"),
        ("facebook", "Facebook access token not configured"),
        ("tiktok", "TikTok access token not configured"),
        ("pinterest", "Pinterest access token not configured"),
    ];
    for (platform_id, message) in expected {
        let outcome = report
            .get(platform_id)
            .unwrap_or_else(|| panic!("missing outcome for '{platform_id}'"));
        assert_eq!(outcome.error_message(), Some(message));
    }
}

#[tokio::test]
async fn blank_credential_counts_as_not_configured() {
    let server = MockServer::start().await;
    forbid_all_traffic(&server).await;

    let client = test_client(&server.uri());
    let credentials = ApiCredentials {
        tiktok_access_token: Some("   ".to_string()),
        ..ApiCredentials::default()
    };
    let requests = vec![ProfileRequest::new("tiktok", "acmehandle")];

    let report = fetch_all_platform_stats(&client, &credentials, &requests).await;

    let outcome = report.get("tiktok").expect("missing outcome for tiktok");
    assert_eq!(
        outcome.error_message(),
        Some("TikTok access token not configured")
    );
}

// ---------------------------------------------------------------------------
// Failure isolation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn one_platform_failure_does_not_affect_siblings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/research/user/info/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "data": {
                "follower_count": 15_000,
                "heart_count": 90_000,
                "video_view_count": 1_200_000,
                "video_count": 210
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Pinterest returns garbage; TikTok and Facebook still succeed.
    Mock::given(method("GET"))
        .and(path("/user_account"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/acme-page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"fan_count": 120})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let credentials = ApiCredentials {
        facebook_access_token: Some("fb-token".to_string()),
        tiktok_access_token: Some("tt-token".to_string()),
        pinterest_access_token: Some("pin-token".to_string()),
        ..ApiCredentials::default()
    };
    let requests = vec![
        ProfileRequest::new("tiktok", "acmehandle"),
        ProfileRequest::new("pinterest", "acme-pins"),
        ProfileRequest::new("facebook", "acme-page"),
    ];

    let report = fetch_all_platform_stats(&client, &credentials, &requests).await;

    let tiktok = report.get("tiktok").expect("missing outcome for tiktok");
    assert_eq!(
        tiktok.as_stats().map(|s| s.followers),
        Some(15_000),
        "tiktok outcome: {tiktok:?}"
    );

    let pinterest = report
        .get("pinterest")
        .expect("missing outcome for pinterest");
    let message = pinterest
        .error_message()
        .unwrap_or_else(|| panic!("expected error for pinterest, got: {pinterest:?}"));
    assert!(
        message.starts_with("Pinterest API error: "),
        "unexpected message: {message}"
    );

    let facebook = report.get("facebook").expect("missing outcome for facebook");
    assert_eq!(
        facebook.as_stats().map(|s| s.followers),
        Some(120),
        "facebook outcome: {facebook:?}"
    );
}

#[tokio::test]
async fn slow_platform_times_out_as_platform_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/research/user/info/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&json!({"data": {"follower_count": 1}}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = test_client_with_timeout(&server.uri(), 1);
    let credentials = ApiCredentials {
        tiktok_access_token: Some("tt-token".to_string()),
        ..ApiCredentials::default()
    };
    let requests = vec![ProfileRequest::new("tiktok", "acmehandle")];

    let report = fetch_all_platform_stats(&client, &credentials, &requests).await;

    let outcome = report.get("tiktok").expect("missing outcome for tiktok");
    let message = outcome
        .error_message()
        .unwrap_or_else(|| panic!("expected error for tiktok, got: {outcome:?}"));
    assert!(
        message.starts_with("TikTok API error: "),
        "unexpected message: {message}"
    );
}

/// YouTube carries its API key in the query string, so a transport error
/// rendering the request URL would leak the secret into the persisted
/// outcome.
#[tokio::test]
async fn transport_error_outcome_does_not_leak_query_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&json!({"items": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = test_client_with_timeout(&server.uri(), 1);
    let credentials = ApiCredentials {
        youtube_api_key: Some("super-secret-key".to_string()),
        ..ApiCredentials::default()
    };
    let requests = vec![ProfileRequest::new("youtube", "Acme Outfitters")];

    let report = fetch_all_platform_stats(&client, &credentials, &requests).await;

    let outcome = report.get("youtube").expect("missing outcome for youtube");
    let message = outcome
        .error_message()
        .unwrap_or_else(|| panic!("expected error for youtube, got: {outcome:?}"));
    assert!(
        message.starts_with("YouTube API error: "),
        "unexpected message: {message}"
    );
    assert!(
        !message.contains("super-secret-key"),
        "api key leaked into outcome message: {message}"
    );
    assert!(
        !message.contains(&server.uri()),
        "request url leaked into outcome message: {message}"
    );
}
