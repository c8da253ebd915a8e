use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
///
/// Every variable has a default; the five credential slots are optional and a
/// blank value counts as unset, so a commented-out `.env` line and an empty
/// one behave the same.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let secret = |var: &str| -> Option<String> { lookup(var).ok().filter(|v| !v.trim().is_empty()) };

    let log_level = or_default("SOCIALPROOF_LOG_LEVEL", "info");
    let profiles_path = PathBuf::from(or_default(
        "SOCIALPROOF_PROFILES_PATH",
        "./config/profiles.yaml",
    ));
    let request_timeout_secs = parse_u64("SOCIALPROOF_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SOCIALPROOF_USER_AGENT", "socialproof/0.1 (storefront-stats)");

    let youtube_api_key = secret("YOUTUBE_API_KEY");
    let instagram_access_token = secret("INSTAGRAM_ACCESS_TOKEN");
    let facebook_access_token = secret("FACEBOOK_ACCESS_TOKEN");
    let tiktok_access_token = secret("TIKTOK_ACCESS_TOKEN");
    let pinterest_access_token = secret("PINTEREST_ACCESS_TOKEN");

    Ok(AppConfig {
        log_level,
        profiles_path,
        request_timeout_secs,
        user_agent,
        youtube_api_key,
        instagram_access_token,
        facebook_access_token,
        tiktok_access_token,
        pinterest_access_token,
    })
}
