// src/client/workspace.rs
use super::{resolve, ClientError, ClientOptions, ResolvedConfig};
use crate::config::EnvVars;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const CURRENT_USER_PATH: &str = "/api/2.0/preview/scim/v2/Me";

const USER_AGENT: &str = concat!("workspace-client-probe/", env!("CARGO_PKG_VERSION"));

/// The authenticated principal as returned by the SCIM `Me` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub user_name: Option<String>,
    pub display_name: Option<String>,
    pub active: Option<bool>,
}

/// Minimal workspace client: resolved configuration plus an HTTP client
pub struct WorkspaceClient {
    config: ResolvedConfig,
    http: Client,
}

impl WorkspaceClient {
    /// Resolve configuration from `options` and `env` and build the client.
    /// No network I/O happens until an API call is made.
    pub fn new(
        options: &ClientOptions,
        env: &EnvVars,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let config = resolve(options, env)?;
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn current_user(&self) -> CurrentUserApi<'_> {
        CurrentUserApi { client: self }
    }
}

pub struct CurrentUserApi<'a> {
    client: &'a WorkspaceClient,
}

impl CurrentUserApi<'_> {
    /// GET /api/2.0/preview/scim/v2/Me
    pub async fn me(&self) -> Result<User, ClientError> {
        let config = &self.client.config;
        let url = config
            .host
            .join(CURRENT_USER_PATH)
            .map_err(|source| ClientError::InvalidHost {
                host: config.host.to_string(),
                source,
            })?;
        debug!("GET {}", url);

        let resp = self
            .client
            .http
            .get(url)
            .bearer_auth(&config.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, &body));
        }

        let body = resp.text().await?;
        serde_json::from_str::<User>(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("cannot parse user: {}", e)))
    }
}
