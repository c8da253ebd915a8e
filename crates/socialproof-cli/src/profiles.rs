//! Profiles command handler: read-only view of the configured accounts.

use socialproof_core::AppConfig;
use socialproof_stats::Platform;

/// List configured profiles with their activation state and whether the
/// matching credential is present.
///
/// # Errors
///
/// Returns an error if the profiles file cannot be loaded.
pub(crate) fn run_profiles(config: &AppConfig) -> anyhow::Result<()> {
    let profiles = socialproof_core::load_profiles(&config.profiles_path)?;

    if profiles.profiles.is_empty() {
        println!(
            "no profiles configured; add entries to {}",
            config.profiles_path.display()
        );
        return Ok(());
    }

    let credentials = crate::fetch::credentials_from_config(config);

    let header = format!("{:<12}{:<26}{:<9}CREDENTIAL", "PLATFORM", "PROFILE", "ACTIVE");
    println!("{header}");
    for profile in &profiles.profiles {
        let active = if profile.active { "yes" } else { "no" };
        let credential = match Platform::from_id(&profile.platform) {
            Some(platform) => {
                if credentials.secret_for(platform).is_some() {
                    "configured".to_string()
                } else {
                    format!("{} missing", platform.credential_label())
                }
            }
            None => "unsupported platform".to_string(),
        };
        println!(
            "{:<12}{:<26}{:<9}{}",
            profile.platform, profile.profile_name, active, credential
        );
    }

    Ok(())
}
