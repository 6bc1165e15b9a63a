use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::errors::ScoutError;

/// Where a rendered report ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSink {
    Stdout,
    File(PathBuf),
}

impl ReportSink {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ReportSink::File(path),
            None => ReportSink::Stdout,
        }
    }

    /// Only stdout may receive terminal styling; files get plain text.
    pub fn allows_styling(&self) -> bool {
        matches!(self, ReportSink::Stdout)
    }

    pub async fn write(&self, rendered: &str) -> Result<(), ScoutError> {
        match self {
            ReportSink::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(rendered.as_bytes()).await?;
                stdout.flush().await?;
            }
            ReportSink::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(path, rendered).await?;
                info!(path = %path.display(), bytes = rendered.len(), "Report written");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(ReportSink::from_path(None), ReportSink::Stdout);
        assert_eq!(
            ReportSink::from_path(Some(PathBuf::from("out.csv"))),
            ReportSink::File(PathBuf::from("out.csv"))
        );
    }

    #[test]
    fn test_only_stdout_allows_styling() {
        assert!(ReportSink::Stdout.allows_styling());
        assert!(!ReportSink::File(PathBuf::from("report.txt")).allows_styling());
    }

    #[tokio::test]
    async fn test_write_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("cves.csv");
        ReportSink::File(path.clone()).write("cve_id\nCVE-1\n").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cve_id\nCVE-1\n");
    }
}
