// src/config/mod.rs
mod env;
mod models;
pub mod profile;

pub use env::EnvVars;
pub use models::*;

use ::config::{Config, Environment, File};

/// Base name of the optional settings file (`workspace-probe.yaml`, `.json`, `.toml`)
pub const SETTINGS_FILE: &str = "workspace-probe";

/// Prefix for settings overrides taken from the environment, e.g. `WSPROBE_TIMEOUT_SECS`
pub const SETTINGS_ENV_PREFIX: &str = "WSPROBE";

/// Load probe settings from defaults, the optional settings file and `WSPROBE_*` variables
pub fn load_settings() -> Result<ProbeSettings, SettingsError> {
    load_settings_from(SETTINGS_FILE)
}

pub fn load_settings_from(file_name: &str) -> Result<ProbeSettings, SettingsError> {
    let defaults = ProbeSettings::default();

    let settings: ProbeSettings = Config::builder()
        .set_default("explicit_profile", defaults.explicit_profile)?
        .set_default("env_file", defaults.env_file.to_string_lossy().into_owned())?
        .set_default("timeout_secs", defaults.timeout_secs)?
        .set_default("log_filter", defaults.log_filter)?
        .add_source(File::with_name(file_name).required(false))
        .add_source(Environment::with_prefix(SETTINGS_ENV_PREFIX))
        .build()?
        .try_deserialize()?;

    settings.validate()?;
    Ok(settings)
}
