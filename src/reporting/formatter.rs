use chrono::{DateTime, Utc};
use console::style;
use serde::Serialize;
use std::collections::HashSet;

use crate::config::ReportFormat;
use crate::errors::ScoutError;
use crate::models::{CveResult, Severity};
use crate::utils::formatting::format_epss;
use crate::utils::truncation::truncate_chars;

const CSV_HEADER: &str = "cve_id,digest,repo_name,severity,epss_score,summary";
const TEXT_SUMMARY_CHARS: usize = 120;

/// Counts over a finished report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub images_affected: usize,
    pub distinct_cves: usize,
}

impl ReportSummary {
    pub fn from_results(results: &[CveResult]) -> Self {
        let images: HashSet<&str> = results.iter().map(|r| r.digest.as_str()).collect();
        let cves: HashSet<&str> = results.iter().map(|r| r.cve_id.as_str()).collect();
        Self {
            total: results.len(),
            critical: results.iter().filter(|r| r.severity == Severity::Critical).count(),
            high: results.iter().filter(|r| r.severity == Severity::High).count(),
            images_affected: images.len(),
            distinct_cves: cves.len(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    organization: Option<&'a str>,
    summary: ReportSummary,
    results: &'a [CveResult],
}

/// Render the report rows in the requested format. `colored` only affects the
/// text format and should be set only when the report goes to a terminal.
pub fn render_report(
    format: ReportFormat,
    results: &[CveResult],
    organization: Option<&str>,
    colored: bool,
) -> Result<String, ScoutError> {
    match format {
        ReportFormat::Text => Ok(format_text(results, colored)),
        ReportFormat::Json => format_json(results, organization, Utc::now()),
        ReportFormat::Csv => Ok(format_csv(results)),
        ReportFormat::Markdown => Ok(format_markdown(results)),
    }
}

pub fn format_text(results: &[CveResult], colored: bool) -> String {
    let mut out = String::new();
    for result in results {
        let severity = match result.severity {
            Severity::Critical => style(result.severity.as_str()).red().bold(),
            _ => style(result.severity.as_str()).yellow(),
        }
        .force_styling(colored);
        out.push_str(&format!(
            "{:<16} {:<8} {}@{} epss={} {}\n",
            result.cve_id,
            severity,
            result.repo_name,
            result.digest,
            format_epss(result.epss_score),
            truncate_chars(first_line(&result.summary), TEXT_SUMMARY_CHARS),
        ));
    }
    out
}

pub fn format_json(
    results: &[CveResult],
    organization: Option<&str>,
    generated_at: DateTime<Utc>,
) -> Result<String, ScoutError> {
    let report = JsonReport {
        generated_at,
        organization,
        summary: ReportSummary::from_results(results),
        results,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn format_csv(results: &[CveResult]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for result in results {
        let epss = result.epss_score.map(|s| s.to_string()).unwrap_or_default();
        let fields = [
            result.cve_id.as_str(),
            result.digest.as_str(),
            result.repo_name.as_str(),
            result.severity.as_str(),
            epss.as_str(),
            result.summary.as_str(),
        ];
        let line: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Quote a CSV field when it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn format_markdown(results: &[CveResult]) -> String {
    let summary = ReportSummary::from_results(results);
    let mut out = String::from("# High-Severity CVE Report\n\n");
    out.push_str(&format!(
        "| Severity | Count |\n|---|---|\n| Critical | {} |\n| High | {} |\n| **Total** | **{}** |\n\n",
        summary.critical, summary.high, summary.total
    ));
    out.push_str(&format!(
        "{} distinct CVEs across {} images.\n\n",
        summary.distinct_cves, summary.images_affected
    ));
    out.push_str("| CVE | Severity | Repository | Digest | EPSS | Summary |\n|---|---|---|---|---|---|\n");
    for result in results {
        out.push_str(&format!(
            "| {} | {} | {} | `{}` | {} | {} |\n",
            result.cve_id,
            result.severity,
            escape_markdown_cell(&result.repo_name),
            result.digest,
            format_epss(result.epss_score),
            escape_markdown_cell(first_line(&result.summary)),
        ));
    }
    out
}

fn escape_markdown_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}
