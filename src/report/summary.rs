// src/report/summary.rs
use crate::probe::{ProbeKind, ProbeOutcome, ProbeResults};

/// Pass/fail/skip counts over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn from_results(results: &ProbeResults) -> Self {
        results
            .records()
            .iter()
            .fold(Summary::default(), |mut summary, record| {
                match record.outcome {
                    ProbeOutcome::Success(_) => summary.passed += 1,
                    ProbeOutcome::Failure { .. } => summary.failed += 1,
                    ProbeOutcome::Skipped { .. } => summary.skipped += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// 0 when nothing failed; skipped probes do not count as failures
    pub fn exit_code(&self) -> u8 {
        if self.failed == 0 {
            0
        } else {
            1
        }
    }
}

/// Which advice block the report ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    WorksWithoutConfig,
    NeedsConfig { explicit_profile_works: bool },
}

impl Recommendation {
    /// Only the no-config and explicit-profile probes matter here
    pub fn from_results(results: &ProbeResults) -> Self {
        let failed = |kind| {
            results
                .outcome(kind)
                .map(ProbeOutcome::is_failure)
                .unwrap_or(false)
        };

        if failed(ProbeKind::NoConfig) {
            Recommendation::NeedsConfig {
                explicit_profile_works: results
                    .outcome(ProbeKind::ExplicitProfile)
                    .map(ProbeOutcome::is_success)
                    .unwrap_or(false),
            }
        } else {
            Recommendation::WorksWithoutConfig
        }
    }
}
