// src/config/profile.rs
// Reads named sections from the `.databrickscfg` INI file.
use ::config::{FileFormat, Format, Map, Value};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".databrickscfg";
pub const DEFAULT_PROFILE: &str = "DEFAULT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSection {
    pub host: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Read the `[profile]` section of `path`. Returns `Ok(None)` when the file has no such section.
///
/// Section names match exactly: `[DEV]` is not `dev`, and `[team.dev]` is a
/// single profile rather than a nested key.
pub fn read_section(path: &Path, profile: &str) -> Result<Option<ProfileSection>, ProfileError> {
    let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // Parse the INI text directly so dotted section names are not split into paths
    let mut sections = <FileFormat as Format>::parse(&FileFormat::Ini, None, &text).map_err(
        |source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        },
    )?;

    let values = match sections.remove(profile).map(Value::into_table) {
        Some(Ok(values)) => values,
        // A top-level key of the same name is not a section
        _ => return Ok(None),
    };

    Ok(Some(ProfileSection {
        host: non_empty(&values, "host"),
        token: non_empty(&values, "token"),
    }))
}

fn non_empty(values: &Map<String, Value>, key: &str) -> Option<String> {
    values
        .get(key)
        .cloned()
        .and_then(|value| value.into_string().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
