use serde::{Deserialize, Serialize};
use std::fmt;

use super::image::Image;
use super::vulnerability::{Severity, Vulnerability};

/// One row of the CVE report: a reportable vulnerability found in an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveResult {
    pub cve_id: String,
    pub digest: String,
    pub repo_name: String,
    pub severity: Severity,
    pub epss_score: Option<f64>,
    pub summary: String,
}

impl CveResult {
    /// Project a vulnerability onto the image it was found in. Returns `None`
    /// unless the vulnerability is CRITICAL or HIGH.
    pub fn from_finding(image: &Image, vuln: &Vulnerability) -> Option<Self> {
        let severity = vuln.severity().filter(Severity::is_reportable)?;
        Some(Self {
            cve_id: vuln.source_id.clone(),
            digest: image.digest.clone(),
            repo_name: image.repo_name.clone(),
            severity,
            epss_score: vuln.epss_score(),
            summary: vuln.description.clone(),
        })
    }
}

impl fmt::Display for CveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let epss = self
            .epss_score
            .map(|s| format!("{:.5}", s))
            .unwrap_or_else(|| "n/a".to_string());
        write!(
            f,
            "{} {} {}@{} epss={} {}",
            self.cve_id, self.severity, self.repo_name, self.digest, epss, self.summary
        )
    }
}
