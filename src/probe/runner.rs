// src/probe/runner.rs
use super::env_file::EnvFileSource;
use super::types::{ProbeKind, ProbeOutcome, ProbeRecord, ProbeResults};
use crate::client::{ClientOptions, WorkspaceConnector, PROFILE_ENV};
use crate::config::EnvVars;
use tracing::{info, warn};

/// Runs the three client-construction probes in order and classifies each one.
///
/// Every probe gets its own client. Failures are turned into
/// [`ProbeOutcome::Failure`] and never escape the runner.
pub struct ProbeRunner<C, F> {
    connector: C,
    env_file: F,
    env: EnvVars,
    explicit_profile: String,
}

impl<C, F> ProbeRunner<C, F>
where
    C: WorkspaceConnector,
    F: EnvFileSource,
{
    pub fn new(connector: C, env_file: F, env: EnvVars, explicit_profile: impl Into<String>) -> Self {
        Self {
            connector,
            env_file,
            env,
            explicit_profile: explicit_profile.into(),
        }
    }

    pub async fn run_all(&self) -> ProbeResults {
        let mut results = ProbeResults::new();

        // Strict order: the env-file probe works on an overlaid environment and runs last
        for kind in ProbeKind::ALL {
            results.push(self.run(kind).await);
        }

        info!(
            "Probes complete via {} connector: {} recorded",
            self.connector.name(),
            results.len()
        );
        results
    }

    pub async fn run(&self, kind: ProbeKind) -> ProbeRecord {
        let (name, title) = self.describe(kind);
        info!(probe = %kind, "Starting {}", name);

        let mut notes = Vec::new();
        let outcome = match kind {
            ProbeKind::NoConfig => self.verify(&ClientOptions::default(), &self.env).await,
            ProbeKind::ExplicitProfile => {
                let options = ClientOptions::with_profile(self.explicit_profile.as_str());
                self.verify(&options, &self.env).await
            }
            ProbeKind::EnvFile => self.run_with_env_file(&mut notes).await,
        };

        match &outcome {
            ProbeOutcome::Success(identity) => {
                info!(probe = %kind, user = ?identity.user_name, "Probe passed");
            }
            ProbeOutcome::Failure { category, message } => {
                warn!(probe = %kind, %category, "Probe failed: {}", message);
            }
            ProbeOutcome::Skipped { reason } => {
                info!(probe = %kind, "Probe skipped: {}", reason);
            }
        }

        ProbeRecord {
            kind,
            name,
            title,
            notes,
            outcome,
        }
    }

    fn describe(&self, kind: ProbeKind) -> (String, String) {
        let number = kind.number();
        match kind {
            ProbeKind::NoConfig => (
                format!("Test {} (No config)", number),
                "WorkspaceClient() without any configuration".to_string(),
            ),
            ProbeKind::ExplicitProfile => (
                format!("Test {} (profile='{}')", number, self.explicit_profile),
                format!("WorkspaceClient(profile='{}')", self.explicit_profile),
            ),
            ProbeKind::EnvFile => (
                format!("Test {} ({} file)", number, self.env_file.label()),
                format!("WorkspaceClient() with {} file", self.env_file.label()),
            ),
        }
    }

    async fn run_with_env_file(&self, notes: &mut Vec<String>) -> ProbeOutcome {
        let label = self.env_file.label();

        let pairs = match self.env_file.load() {
            Ok(Some(pairs)) => pairs,
            Ok(None) => {
                return ProbeOutcome::Skipped {
                    reason: format!("{} file does not exist", label),
                };
            }
            Err(e) => return ProbeOutcome::failure("EnvFileError", &e.to_string()),
        };

        let env = self.env.overlay(pairs);
        notes.push(format!(
            "{} sets {}={}",
            label,
            PROFILE_ENV,
            env.get(PROFILE_ENV).unwrap_or("None")
        ));

        self.verify(&ClientOptions::default(), &env).await
    }

    async fn verify(&self, options: &ClientOptions, env: &EnvVars) -> ProbeOutcome {
        match self.connector.current_user(options, env).await {
            Ok(user) => ProbeOutcome::Success(user.into()),
            Err(e) => ProbeOutcome::failure(e.category(), &e.to_string()),
        }
    }
}
