// src/probe/types.rs
use crate::client::User;
use std::fmt;

/// Failure messages are cut to this many characters for display
pub const MAX_MESSAGE_CHARS: usize = 150;

/// The three construction variants, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    NoConfig,
    ExplicitProfile,
    EnvFile,
}

impl ProbeKind {
    pub const ALL: [ProbeKind; 3] = [
        ProbeKind::NoConfig,
        ProbeKind::ExplicitProfile,
        ProbeKind::EnvFile,
    ];

    /// 1-based position in the run
    pub fn number(&self) -> usize {
        match self {
            ProbeKind::NoConfig => 1,
            ProbeKind::ExplicitProfile => 2,
            ProbeKind::EnvFile => 3,
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::NoConfig => write!(f, "no-config"),
            ProbeKind::ExplicitProfile => write!(f, "explicit-profile"),
            ProbeKind::EnvFile => write!(f, "env-file"),
        }
    }
}

/// Identity fields surfaced by a successful probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_name: Option<String>,
    pub id: Option<String>,
    pub active: Option<bool>,
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            user_name: user.user_name,
            id: user.id,
            active: user.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success(Identity),
    Failure { category: String, message: String },
    Skipped { reason: String },
}

impl ProbeOutcome {
    /// Failure with its message truncated to [`MAX_MESSAGE_CHARS`]
    pub fn failure(category: impl Into<String>, message: &str) -> Self {
        ProbeOutcome::Failure {
            category: category.into(),
            message: truncate_message(message),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProbeOutcome::Failure { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ProbeOutcome::Skipped { .. })
    }
}

pub fn truncate_message(message: &str) -> String {
    message.chars().take(MAX_MESSAGE_CHARS).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRecord {
    pub kind: ProbeKind,
    /// Summary label, e.g. `Test 2 (profile='dev')`
    pub name: String,
    /// Section heading, e.g. `WorkspaceClient(profile='dev')`
    pub title: String,
    pub notes: Vec<String>,
    pub outcome: ProbeOutcome,
}

/// Ordered probe records, at most one per [`ProbeKind`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResults {
    records: Vec<ProbeRecord>,
}

impl ProbeResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any earlier record for the same probe
    pub fn push(&mut self, record: ProbeRecord) {
        match self.records.iter_mut().find(|r| r.kind == record.kind) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn records(&self) -> &[ProbeRecord] {
        &self.records
    }

    pub fn get(&self, kind: ProbeKind) -> Option<&ProbeRecord> {
        self.records.iter().find(|r| r.kind == kind)
    }

    pub fn outcome(&self, kind: ProbeKind) -> Option<&ProbeOutcome> {
        self.get(kind).map(|r| &r.outcome)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(kind: ProbeKind, outcome: ProbeOutcome) -> ProbeRecord {
        ProbeRecord {
            kind,
            name: kind.to_string(),
            title: kind.to_string(),
            notes: Vec::new(),
            outcome,
        }
    }

    #[test]
    fn test_push_replaces_same_kind() {
        let mut results = ProbeResults::new();
        results.push(record(ProbeKind::NoConfig, ProbeOutcome::failure("ConfigError", "x")));
        results.push(record(
            ProbeKind::EnvFile,
            ProbeOutcome::Skipped { reason: "absent".into() },
        ));
        results.push(record(
            ProbeKind::NoConfig,
            ProbeOutcome::Skipped { reason: "again".into() },
        ));

        assert_eq!(results.len(), 2);
        assert_eq!(results.records()[0].kind, ProbeKind::NoConfig);
        assert!(results.outcome(ProbeKind::NoConfig).unwrap().is_skipped());
        assert!(results.outcome(ProbeKind::ExplicitProfile).is_none());
    }

    #[test]
    fn test_failure_truncates_long_message() {
        let long = "x".repeat(400);
        match ProbeOutcome::failure("ApiError", &long) {
            ProbeOutcome::Failure { category, message } => {
                assert_eq!(category, "ApiError");
                assert_eq!(message.len(), MAX_MESSAGE_CHARS);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn truncation_is_a_char_prefix(message in ".{0,400}") {
            let truncated = truncate_message(&message);
            prop_assert!(truncated.chars().count() <= MAX_MESSAGE_CHARS);
            prop_assert!(message.starts_with(&truncated));
            if message.chars().count() <= MAX_MESSAGE_CHARS {
                prop_assert_eq!(&truncated, &message);
            }
        }
    }
}
