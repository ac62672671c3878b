// src/client/mod.rs
mod connector;
mod error;
mod resolve;
mod workspace;

pub use connector::{HttpConnector, WorkspaceConnector};
pub use error::ClientError;
pub use resolve::{
    resolve, ClientOptions, ResolvedConfig, CONFIG_FILE_ENV, HOST_ENV, PROFILE_ENV, TOKEN_ENV,
};
pub use workspace::{CurrentUserApi, User, WorkspaceClient, CURRENT_USER_PATH};
