// src/report/render.rs
use super::summary::{Recommendation, Summary};
use crate::client::PROFILE_ENV;
use crate::config::ProbeSettings;
use crate::probe::{ProbeOutcome, ProbeRecord, ProbeResults};
use std::io::{self, Write};

pub const SEPARATOR_WIDTH: usize = 60;

/// Writes the human-readable probe report. The output is not a stable format.
pub struct Reporter<W: Write> {
    out: W,
    explicit_profile: String,
    env_file_label: String,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, settings: &ProbeSettings) -> Self {
        Self {
            out,
            explicit_profile: settings.explicit_profile.clone(),
            env_file_label: settings.env_file_label(),
        }
    }

    /// Write every probe section, the summary and the recommendations
    pub fn write_report(&mut self, results: &ProbeResults) -> io::Result<Summary> {
        writeln!(self.out, "\n🧪 Testing WorkspaceClient Initialization\n")?;

        for (index, record) in results.records().iter().enumerate() {
            if index > 0 {
                writeln!(self.out)?;
            }
            self.write_probe(record)?;
        }

        let summary = Summary::from_results(results);
        self.write_summary(results, &summary)?;
        self.write_recommendations(Recommendation::from_results(results))?;

        writeln!(self.out, "\n")?;
        self.out.flush()?;
        Ok(summary)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, heading: &str) -> io::Result<()> {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        writeln!(self.out, "{}", separator)?;
        writeln!(self.out, "{}", heading)?;
        writeln!(self.out, "{}", separator)
    }

    fn write_probe(&mut self, record: &ProbeRecord) -> io::Result<()> {
        self.banner(&format!("TEST {}: {}", record.kind.number(), record.title))?;

        for note in &record.notes {
            writeln!(self.out, "   {}", note)?;
        }

        match &record.outcome {
            ProbeOutcome::Success(identity) => {
                writeln!(
                    self.out,
                    "✅ SUCCESS: Connected as {}",
                    identity.user_name.as_deref().unwrap_or("None")
                )?;
                writeln!(
                    self.out,
                    "   User ID: {}",
                    identity.id.as_deref().unwrap_or("None")
                )?;
                let active = match identity.active {
                    Some(true) => "True",
                    Some(false) => "False",
                    None => "None",
                };
                writeln!(self.out, "   Active: {}", active)
            }
            ProbeOutcome::Failure { category, message } => {
                writeln!(self.out, "❌ FAILED: {}", category)?;
                writeln!(self.out, "   Message: {}", message)
            }
            ProbeOutcome::Skipped { reason } => writeln!(self.out, "⚠️  SKIPPED: {}", reason),
        }
    }

    fn write_summary(&mut self, results: &ProbeResults, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        self.banner("📋 TEST SUMMARY")?;

        for record in results.records() {
            let status = match record.outcome {
                ProbeOutcome::Success(_) => "✅ PASSED",
                ProbeOutcome::Failure { .. } => "❌ FAILED",
                ProbeOutcome::Skipped { .. } => "⚠️  SKIPPED",
            };
            writeln!(self.out, "{}: {}", status, record.name)?;
        }

        writeln!(
            self.out,
            "\nTotal: {} passed, {} failed, {} skipped",
            summary.passed, summary.failed, summary.skipped
        )
    }

    fn write_recommendations(&mut self, recommendation: Recommendation) -> io::Result<()> {
        writeln!(self.out)?;
        self.banner("💡 RECOMMENDATIONS")?;

        match recommendation {
            Recommendation::WorksWithoutConfig => writeln!(
                self.out,
                "✅ WorkspaceClient() works without explicit configuration!"
            ),
            Recommendation::NeedsConfig {
                explicit_profile_works,
            } => {
                writeln!(
                    self.out,
                    "❌ WorkspaceClient() does NOT work without configuration"
                )?;
                writeln!(self.out, "\n✅ Working solutions:")?;

                if explicit_profile_works {
                    writeln!(
                        self.out,
                        "   1. Use explicit parameter: WorkspaceClient(profile='{}')",
                        self.explicit_profile
                    )?;
                }

                writeln!(self.out, "\n📝 Recommended approach for your app:")?;
                writeln!(
                    self.out,
                    "   Add to {} file: {}={}",
                    self.env_file_label, PROFILE_ENV, self.explicit_profile
                )?;
                writeln!(self.out, "   Then use: WorkspaceClient() in your code")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{Identity, ProbeKind};

    fn record(kind: ProbeKind, name: &str, outcome: ProbeOutcome) -> ProbeRecord {
        ProbeRecord {
            kind,
            name: name.to_string(),
            title: format!("title {}", kind.number()),
            notes: Vec::new(),
            outcome,
        }
    }

    fn success() -> ProbeOutcome {
        ProbeOutcome::Success(Identity {
            user_name: Some("ada@example.com".to_string()),
            id: Some("8421337".to_string()),
            active: Some(true),
        })
    }

    fn render(results: &ProbeResults) -> (String, Summary) {
        let mut reporter = Reporter::new(Vec::new(), &ProbeSettings::default());
        let summary = reporter.write_report(results).unwrap();
        (String::from_utf8(reporter.into_inner()).unwrap(), summary)
    }

    #[test]
    fn test_report_for_misconfigured_ambient() {
        let mut results = ProbeResults::new();
        results.push(record(
            ProbeKind::NoConfig,
            "Test 1 (No config)",
            ProbeOutcome::failure("ConfigError", "default auth: cannot configure default credentials"),
        ));
        results.push(record(ProbeKind::ExplicitProfile, "Test 2 (profile='dev')", success()));
        results.push(record(
            ProbeKind::EnvFile,
            "Test 3 (.env file)",
            ProbeOutcome::Skipped {
                reason: ".env file does not exist".to_string(),
            },
        ));

        let (output, summary) = render(&results);

        assert_eq!(summary.exit_code(), 1);
        assert!(output.contains(&"=".repeat(SEPARATOR_WIDTH)));
        assert!(output.contains("TEST 1: title 1"));
        assert!(output.contains("❌ FAILED: ConfigError"));
        assert!(output.contains("✅ SUCCESS: Connected as ada@example.com"));
        assert!(output.contains("   User ID: 8421337"));
        assert!(output.contains("   Active: True"));
        assert!(output.contains("⚠️  SKIPPED: .env file does not exist"));
        assert!(output.contains("Total: 1 passed, 1 failed, 1 skipped"));
        assert!(output.contains("1. Use explicit parameter: WorkspaceClient(profile='dev')"));
        assert!(output.contains("Add to .env file: DATABRICKS_CONFIG_PROFILE=dev"));

        // Summary lines keep probe order
        let first = output.find("❌ FAILED: Test 1 (No config)").unwrap();
        let second = output.find("✅ PASSED: Test 2 (profile='dev')").unwrap();
        let third = output.find("⚠️  SKIPPED: Test 3 (.env file)").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_report_when_ambient_works() {
        let mut results = ProbeResults::new();
        results.push(record(ProbeKind::NoConfig, "Test 1 (No config)", success()));
        results.push(record(
            ProbeKind::ExplicitProfile,
            "Test 2 (profile='dev')",
            ProbeOutcome::failure("ConfigError", "resolve: no dev profile configured"),
        ));
        results.push(record(ProbeKind::EnvFile, "Test 3 (.env file)", success()));

        let (output, _) = render(&results);

        assert!(output.contains("✅ WorkspaceClient() works without explicit configuration!"));
        assert!(!output.contains("Use explicit parameter"));
        assert!(!output.contains("DATABRICKS_CONFIG_PROFILE="));
    }

    #[test]
    fn test_no_explicit_line_when_profile_fails() {
        let mut results = ProbeResults::new();
        results.push(record(
            ProbeKind::NoConfig,
            "Test 1 (No config)",
            ProbeOutcome::failure("ConfigError", "host is not set"),
        ));
        results.push(record(
            ProbeKind::ExplicitProfile,
            "Test 2 (profile='dev')",
            ProbeOutcome::failure("Unauthenticated", "Invalid access token."),
        ));
        results.push(record(ProbeKind::EnvFile, "Test 3 (.env file)", success()));

        let (output, _) = render(&results);

        assert!(output.contains("does NOT work without configuration"));
        assert!(!output.contains("Use explicit parameter"));
        assert!(output.contains("Add to .env file: DATABRICKS_CONFIG_PROFILE=dev"));
    }

    #[test]
    fn test_notes_precede_outcome() {
        let mut results = ProbeResults::new();
        let mut env_record = record(ProbeKind::EnvFile, "Test 3 (.env file)", success());
        env_record.notes.push(".env sets DATABRICKS_CONFIG_PROFILE=dev".to_string());
        results.push(env_record);

        let (output, _) = render(&results);

        let note = output.find("   .env sets DATABRICKS_CONFIG_PROFILE=dev").unwrap();
        let outcome = output.find("✅ SUCCESS").unwrap();
        assert!(note < outcome);
    }
}
