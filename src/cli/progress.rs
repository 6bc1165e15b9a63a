use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::reporting::{ReportEvent, ReportSummary};
use crate::utils::formatting::format_duration;

/// Terminal progress for a report run, driven by [`ReportEvent`]s.
pub struct ReportProgress {
    bar: ProgressBar,
    images: usize,
    findings: usize,
}

impl ReportProgress {
    pub fn new(hidden: bool) -> Self {
        let bar = if hidden { ProgressBar::hidden() } else { ProgressBar::new_spinner() };
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Listing images...");
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar, images: 0, findings: 0 }
    }

    pub fn handle_event(&mut self, event: &ReportEvent) {
        match event {
            ReportEvent::ImagesDiscovered { count } => {
                self.images = *count;
                self.bar.set_length(*count as u64);
                self.bar.set_style(
                    ProgressStyle::default_bar()
                        .template("  {bar:30.cyan/dark_gray} {pos}/{len} images | {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("█▓░"),
                );
            }
            ReportEvent::ImageStarted { repo_name, digest, .. } => {
                self.bar.set_message(format!(
                    "{}@{} | {} findings so far",
                    repo_name,
                    short_digest(digest),
                    self.findings
                ));
            }
            ReportEvent::ImageCompleted { findings } => {
                self.findings += findings;
                self.bar.inc(1);
            }
        }
    }

    pub fn images(&self) -> usize {
        self.images
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn short_digest(digest: &str) -> &str {
    let hex = digest.strip_prefix("sha256:").unwrap_or(digest);
    hex.get(..12).unwrap_or(hex)
}

/// One-line run summary for stderr.
pub fn render_summary(summary: &ReportSummary, images_scanned: usize, elapsed_ms: u64) -> String {
    format!(
        "{} {} findings ({} critical, {} high) in {} of {} images, {}",
        style("✓").green(),
        style(summary.total).white().bold(),
        style(summary.critical).red(),
        style(summary.high).yellow(),
        summary.images_affected,
        images_scanned,
        format_duration(elapsed_ms),
    )
}
