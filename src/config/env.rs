// src/config/env.rs
use std::collections::HashMap;
use std::path::PathBuf;

/// Immutable snapshot of environment variables handed to each probe.
///
/// Probes never touch the process environment; the env-file probe overlays
/// its variables onto a private copy instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment, skipping non-UTF-8 entries
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Value of `key`; empty values count as unset
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Copy with `pairs` added. Variables that are already set keep their value.
    pub fn overlay<I>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut vars = self.vars.clone();
        for (key, value) in pairs {
            vars.entry(key).or_insert(value);
        }
        Self { vars }
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        self.get("HOME")
            .or_else(|| self.get("USERPROFILE"))
            .map(PathBuf::from)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvVars
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_does_not_override_existing() {
        let env = EnvVars::new().with_var("DATABRICKS_CONFIG_PROFILE", "prod");

        let merged = env.overlay(vec![
            ("DATABRICKS_CONFIG_PROFILE".to_string(), "dev".to_string()),
            ("DATABRICKS_HOST".to_string(), "https://example.cloud.databricks.com".to_string()),
        ]);

        assert_eq!(merged.get("DATABRICKS_CONFIG_PROFILE"), Some("prod"));
        assert_eq!(
            merged.get("DATABRICKS_HOST"),
            Some("https://example.cloud.databricks.com")
        );
        // The original snapshot is untouched
        assert_eq!(env.get("DATABRICKS_HOST"), None);
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let env = EnvVars::new().with_var("DATABRICKS_TOKEN", "");
        assert_eq!(env.get("DATABRICKS_TOKEN"), None);
    }

    #[test]
    fn test_home_dir_falls_back_to_userprofile() {
        let env: EnvVars = [("USERPROFILE", "C:\\Users\\probe")].into_iter().collect();
        assert_eq!(env.home_dir(), Some(PathBuf::from("C:\\Users\\probe")));

        let env = env.with_var("HOME", "/home/probe");
        assert_eq!(env.home_dir(), Some(PathBuf::from("/home/probe")));
    }
}
