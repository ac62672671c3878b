// src/probe/mod.rs
mod env_file;
mod runner;
mod types;

pub use env_file::{DotenvFile, EnvFileError, EnvFileSource};
pub use runner::ProbeRunner;
pub use types::{
    truncate_message, Identity, ProbeKind, ProbeOutcome, ProbeRecord, ProbeResults,
    MAX_MESSAGE_CHARS,
};
