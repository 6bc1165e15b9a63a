use serde::{Deserialize, Serialize};
use std::fmt;

/// CVSS severity as reported by Docker Scout. Values are matched exactly, so
/// anything other than the upper-case names lands in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unspecified,
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// Only CRITICAL and HIGH findings make it into the report.
    pub fn is_reportable(&self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unspecified => "UNSPECIFIED",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cvss {
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Epss {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub percentile: Option<f64>,
}

/// A single vulnerability affecting a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub source_id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(default)]
    pub cvss: Option<Cvss>,
    #[serde(default)]
    pub epss: Option<Epss>,
}

impl Vulnerability {
    pub fn severity(&self) -> Option<Severity> {
        self.cvss.as_ref().and_then(|c| c.severity)
    }

    pub fn epss_score(&self) -> Option<f64> {
        self.epss.as_ref().and_then(|e| e.score)
    }
}

/// Vulnerabilities found in one package of an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityPackage {
    #[serde(default)]
    pub purl: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub vulnerabilities: Vec<Vulnerability>,
}
