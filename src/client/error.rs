// src/client/error.rs
use crate::config::profile::ProfileError;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("invalid host {host}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    NotFound(String),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Short category name shown next to a failed probe
    pub fn category(&self) -> &'static str {
        match self {
            ClientError::Config(_) | ClientError::Profile(_) => "ConfigError",
            ClientError::InvalidHost { .. } => "InvalidHost",
            ClientError::Unauthenticated(_) => "Unauthenticated",
            ClientError::PermissionDenied(_) => "PermissionDenied",
            ClientError::NotFound(_) => "NotFound",
            ClientError::Api { .. } => "ApiError",
            ClientError::Transport(_) => "TransportError",
            ClientError::InvalidResponse(_) => "InvalidResponse",
        }
    }

    /// Map a non-success response to an error, pulling the message out of the
    /// workspace error body (`message`) or a SCIM error body (`detail`).
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("detail"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthenticated(message),
            StatusCode::FORBIDDEN => ClientError::PermissionDenied(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}
