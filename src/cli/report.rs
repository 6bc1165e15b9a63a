use std::time::Instant;
use tracing::info;

use crate::config::ConfigOverrides;
use crate::errors::ScoutError;
use crate::graphql::ScoutClient;
use crate::reporting::{generate_report_data_with_events, render_report, ReportEvent, ReportSink, ReportSummary};
use super::commands::Cli;
use super::progress::{render_summary, ReportProgress};

pub async fn handle_report(cli: &Cli) -> Result<(), ScoutError> {
    let overrides = ConfigOverrides {
        organization: cli.org.clone(),
        format: cli.report.format,
        output: cli.report.output.clone(),
    };
    let config = super::load_config(cli.config.as_deref(), &overrides).await?;
    let client = ScoutClient::new(&config)?;

    info!(
        endpoint = client.endpoint(),
        organization = config.organization.as_deref().unwrap_or("<unset>"),
        format = ?config.format,
        "Generating CVE report"
    );

    let started = Instant::now();
    let mut progress = ReportProgress::new(cli.quiet);
    let results = generate_report_data_with_events(&client, &config, &mut |event: &ReportEvent| {
        progress.handle_event(event)
    })
    .await;
    progress.finish();
    let results = results?;

    let sink = ReportSink::from_path(config.output_path.clone());
    let colored = sink.allows_styling() && console::colors_enabled();
    let rendered = render_report(config.format, &results, config.organization.as_deref(), colored)?;
    sink.write(&rendered).await?;

    if !cli.quiet {
        let summary = ReportSummary::from_results(&results);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        eprintln!("{}", render_summary(&summary, progress.images(), elapsed_ms));
    }

    Ok(())
}
