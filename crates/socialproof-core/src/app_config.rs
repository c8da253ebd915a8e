use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub profiles_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub youtube_api_key: Option<String>,
    pub instagram_access_token: Option<String>,
    pub facebook_access_token: Option<String>,
    pub tiktok_access_token: Option<String>,
    pub pinterest_access_token: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("profiles_path", &self.profiles_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
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
