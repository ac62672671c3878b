// src/client/connector.rs
use super::{ClientError, ClientOptions, User, WorkspaceClient};
use crate::config::EnvVars;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Builds a client for one set of options and verifies it with an identity lookup
#[async_trait]
pub trait WorkspaceConnector: Send + Sync {
    async fn current_user(
        &self,
        options: &ClientOptions,
        env: &EnvVars,
    ) -> Result<User, ClientError>;

    fn name(&self) -> &'static str;
}

pub struct HttpConnector {
    timeout: Duration,
}

impl HttpConnector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl WorkspaceConnector for HttpConnector {
    async fn current_user(
        &self,
        options: &ClientOptions,
        env: &EnvVars,
    ) -> Result<User, ClientError> {
        let client = WorkspaceClient::new(options, env, self.timeout)?;
        debug!(
            host = %client.config().host,
            profile = ?client.config().profile,
            "resolved workspace config"
        );

        client.current_user().me().await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
