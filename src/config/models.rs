// src/config/models.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeSettings {
    /// Profile passed explicitly to the client in the second probe
    pub explicit_profile: String,
    /// Env file loaded by the third probe
    pub env_file: PathBuf,
    pub timeout_secs: u64,
    /// Default `tracing` directive, combined with `RUST_LOG`
    pub log_filter: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            explicit_profile: "dev".to_string(),
            env_file: PathBuf::from(".env"),
            timeout_secs: 30,
            log_filter: "workspace_client_probe=warn".to_string(),
        }
    }
}

impl ProbeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Label used for the env file in probe titles and advice, e.g. `.env`
    pub fn env_file_label(&self) -> String {
        self.env_file.display().to_string()
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.explicit_profile.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "explicit_profile must not be empty".to_string(),
            ));
        }

        if self.env_file.as_os_str().is_empty() {
            return Err(SettingsError::Invalid("env_file must not be empty".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}
