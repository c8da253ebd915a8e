use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One platform account to poll, as configured in `profiles.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Lowercase platform identifier, e.g. `"youtube"`. Identifiers outside
    /// the supported set are kept as-is so the aggregator can answer for them
    /// explicitly instead of the file failing to load.
    pub platform: String,
    /// Account handle, page id, or channel query the platform expects.
    pub profile_name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ProfilesFile {
    pub profiles: Vec<ProfileConfig>,
}

impl ProfilesFile {
    /// Profiles that participate in a fetch: active, with a non-blank
    /// profile name.
    #[must_use]
    pub fn active_profiles(&self) -> Vec<&ProfileConfig> {
        self.profiles
            .iter()
            .filter(|p| p.active && !p.profile_name.trim().is_empty())
            .collect()
    }
}

/// Load and validate the profiles configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profiles(path: &Path) -> Result<ProfilesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfilesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let profiles_file: ProfilesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::ProfilesFileParse)?;

    validate_profiles(&profiles_file)?;

    Ok(profiles_file)
}

fn validate_profiles(profiles_file: &ProfilesFile) -> Result<(), ConfigError> {
    let mut seen_platforms = HashSet::new();

    for profile in &profiles_file.profiles {
        if profile.platform.trim().is_empty() {
            return Err(ConfigError::Validation(
                "profile platform must be non-empty".to_string(),
            ));
        }

        // One account per platform; the report is keyed by platform id, so a
        // duplicate could only shadow the other entry.
        let key = profile.platform.to_lowercase();
        if !seen_platforms.insert(key) {
            return Err(ConfigError::Validation(format!(
                "duplicate platform: '{}'",
                profile.platform
            )));
        }
    }

    Ok(())
}
