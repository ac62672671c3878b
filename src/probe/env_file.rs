// src/probe/env_file.rs
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, thiserror::Error)]
#[error("cannot read {path}: {source}")]
pub struct EnvFileError {
    pub path: PathBuf,
    #[source]
    pub source: dotenvy::Error,
}

/// Source of the key/value pairs the env-file probe overlays onto its environment
pub trait EnvFileSource: Send + Sync {
    /// Name shown in titles and notes, e.g. `.env`
    fn label(&self) -> String;

    /// Pairs in file order, or `Ok(None)` when there is no file to load.
    /// Only an unreadable file is an error; lines that do not parse are dropped.
    fn load(&self) -> Result<Option<Vec<(String, String)>>, EnvFileError>;
}

/// `.env`-style file on disk, parsed with `dotenvy`
#[derive(Debug, Clone)]
pub struct DotenvFile {
    path: PathBuf,
}

impl DotenvFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EnvFileSource for DotenvFile {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Option<Vec<(String, String)>>, EnvFileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let to_error = |source| EnvFileError {
            path: self.path.clone(),
            source,
        };

        let mut pairs = Vec::new();
        for entry in dotenvy::from_path_iter(&self.path).map_err(to_error)? {
            match entry {
                Ok(pair) => pairs.push(pair),
                Err(dotenvy::Error::LineParse(line, index)) => {
                    warn!(
                        "Could not parse statement in {} at index {}: {}",
                        self.path.display(),
                        index,
                        line
                    );
                }
                Err(e) => return Err(to_error(e)),
            }
        }

        Ok(Some(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = DotenvFile::new(dir.path().join(".env"));

        assert!(source.load().unwrap().is_none());
    }

    #[test]
    fn test_reads_pairs_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# workspace selection\nDATABRICKS_CONFIG_PROFILE=dev\nAPP_PORT=\"8000\"\n",
        )
        .unwrap();

        let pairs = DotenvFile::new(&path).load().unwrap().unwrap();

        assert_eq!(
            pairs,
            vec![
                ("DATABRICKS_CONFIG_PROFILE".to_string(), "dev".to_string()),
                ("APP_PORT".to_string(), "8000".to_string()),
            ]
        );
    }

    #[test]
    fn test_unparseable_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "DATABRICKS_CONFIG_PROFILE=dev\nthis line is junk\nAPP_PORT=8000\n",
        )
        .unwrap();

        let pairs = DotenvFile::new(&path).load().unwrap().unwrap();

        assert_eq!(
            pairs,
            vec![
                ("DATABRICKS_CONFIG_PROFILE".to_string(), "dev".to_string()),
                ("APP_PORT".to_string(), "8000".to_string()),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_an_error() {
        // A directory exists but cannot be read as an env file
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::create_dir(&path).unwrap();

        let err = DotenvFile::new(&path).load().unwrap_err();

        assert_eq!(err.path, path);
        assert!(matches!(err.source, dotenvy::Error::Io(_)));
    }
}
