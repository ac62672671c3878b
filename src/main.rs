// src/main.rs
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::info;
use workspace_client_probe::{
    client::HttpConnector,
    config::{load_settings, EnvVars},
    probe::{DotenvFile, ProbeRunner},
    report::Reporter,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let settings = load_settings().context("Failed to load probe settings")?;

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(settings.log_filter.parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    info!(
        "Probing with explicit profile '{}' and env file {}",
        settings.explicit_profile,
        settings.env_file.display()
    );

    let runner = ProbeRunner::new(
        HttpConnector::new(settings.timeout()),
        DotenvFile::new(&settings.env_file),
        EnvVars::from_process(),
        settings.explicit_profile.clone(),
    );
    let results = runner.run_all().await;

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), &settings);
    let summary = reporter
        .write_report(&results)
        .context("Failed to write report")?;

    info!(
        "Done: {} passed, {} failed, {} skipped",
        summary.passed, summary.failed, summary.skipped
    );

    Ok(ExitCode::from(summary.exit_code()))
}
