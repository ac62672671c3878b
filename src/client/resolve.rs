// src/client/resolve.rs
use super::ClientError;
use crate::config::profile::{self, CONFIG_FILE_NAME, DEFAULT_PROFILE};
use crate::config::EnvVars;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

pub const HOST_ENV: &str = "DATABRICKS_HOST";
pub const TOKEN_ENV: &str = "DATABRICKS_TOKEN";
pub const PROFILE_ENV: &str = "DATABRICKS_CONFIG_PROFILE";
pub const CONFIG_FILE_ENV: &str = "DATABRICKS_CONFIG_FILE";

/// Explicit construction arguments. Host and token are always discovered
/// from the environment and then the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub profile: Option<String>,
}

impl ClientOptions {
    pub fn with_profile(profile: impl Into<String>) -> Self {
        Self {
            profile: Some(profile.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub host: Url,
    pub token: String,
    pub profile: Option<String>,
}

/// Resolve client configuration: environment variables first, then the
/// selected profile of the config file.
///
/// A profile that was asked for (explicitly or through `DATABRICKS_CONFIG_PROFILE`)
/// must exist; the implicit `DEFAULT` profile is optional.
pub fn resolve(options: &ClientOptions, env: &EnvVars) -> Result<ResolvedConfig, ClientError> {
    let mut host = env.get(HOST_ENV).map(str::to_string);
    let mut token = env.get(TOKEN_ENV).map(str::to_string);
    let requested_profile = options
        .profile
        .clone()
        .or_else(|| env.get(PROFILE_ENV).map(str::to_string));

    if host.is_none() || token.is_none() || requested_profile.is_some() {
        let profile_name = requested_profile.as_deref().unwrap_or(DEFAULT_PROFILE);
        let config_file = env
            .get(CONFIG_FILE_ENV)
            .map(PathBuf::from)
            .or_else(|| env.home_dir().map(|home| home.join(CONFIG_FILE_NAME)));

        match config_file {
            Some(path) if path.is_file() => match profile::read_section(&path, profile_name)? {
                Some(section) => {
                    debug!("Loaded profile {} from {}", profile_name, path.display());
                    host = host.or(section.host);
                    token = token.or(section.token);
                }
                None if requested_profile.is_some() => {
                    return Err(ClientError::Config(format!(
                        "resolve: {} has no {} profile configured",
                        path.display(),
                        profile_name
                    )));
                }
                None => {}
            },
            Some(path) if requested_profile.is_some() => {
                return Err(ClientError::Config(format!(
                    "resolve: {} does not exist. Cannot load profile {}",
                    path.display(),
                    profile_name
                )));
            }
            None if requested_profile.is_some() => {
                return Err(ClientError::Config(format!(
                    "resolve: cannot locate {} to load profile {}",
                    CONFIG_FILE_NAME, profile_name
                )));
            }
            _ => {}
        }
    }

    let host = host.ok_or_else(|| {
        ClientError::Config(
            "default auth: cannot configure default credentials: host is not set".to_string(),
        )
    })?;
    let host = normalize_host(&host)?;

    let token = token.ok_or_else(|| {
        ClientError::Config(format!(
            "default auth: cannot configure default credentials: no token for {}",
            host
        ))
    })?;

    Ok(ResolvedConfig {
        host,
        token,
        profile: requested_profile,
    })
}

/// Parse a workspace host, assuming `https://` when no scheme is given
fn normalize_host(raw: &str) -> Result<Url, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    Url::parse(&candidate).map_err(|source| ClientError::InvalidHost {
        host: raw.to_string(),
        source,
    })
}
