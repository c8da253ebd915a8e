//! Shared configuration for the socialproof workspace.
//!
//! Owns the environment-driven [`AppConfig`] (credential slots, HTTP knobs,
//! logging level) and the YAML profiles file listing which platform accounts
//! to poll.

pub mod app_config;
pub mod config;
pub mod profiles;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use profiles::{load_profiles, ProfileConfig, ProfilesFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read profiles file {path}: {source}")]
    ProfilesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profiles file: {0}")]
    ProfilesFileParse(#[from] serde_yaml::Error),

    #[error("profiles validation error: {0}")]
    Validation(String),
}
