use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ReportFormat;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "scout-cves",
    version,
    long_version = LONG_VERSION,
    about = "Report CRITICAL and HIGH CVEs across a Docker Scout organization"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub report: ReportArgs,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Docker organization (overrides DOCKER_ORG)
    #[arg(long, global = true)]
    pub org: Option<String>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress and summary output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check configuration and query templates without calling the API
    Validate,
}

#[derive(Args, Clone, Debug, Default)]
pub struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs_report() {
        let cli = Cli::try_parse_from(["scout-cves"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.report.format.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_report_flags() {
        let cli = Cli::try_parse_from([
            "scout-cves", "--format", "csv", "-o", "cves.csv", "--org", "acme", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.report.format, Some(ReportFormat::Csv));
        assert_eq!(cli.report.output, Some(PathBuf::from("cves.csv")));
        assert_eq!(cli.org.as_deref(), Some("acme"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_validate_subcommand_with_config() {
        let cli = Cli::try_parse_from(["scout-cves", "validate", "--config", "scout.yaml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Validate)));
        assert_eq!(cli.config, Some(PathBuf::from("scout.yaml")));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["scout-cves", "--format", "pdf"]).is_err());
    }
}
