use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::credentials::resolve_credential;
use crate::errors::ScoutError;

pub const DEFAULT_ENDPOINT: &str = "https://api.scout.docker.com/v1/graphql";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ORG_ENV_VAR: &str = "DOCKER_ORG";
pub const TOKEN_ENV_VAR: &str = "DOCKER_TOKEN";
/// Shorter names, read only when the `DOCKER_*` variable is unset or blank.
pub const ORG_FALLBACK_ENV_VAR: &str = "ORG";
pub const TOKEN_FALLBACK_ENV_VAR: &str = "TOKEN";

/// Contents of an optional YAML configuration file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FileConfig {
    pub organization: Option<String>,
    /// Literal token or a `$VAR` reference resolved from the environment.
    pub token: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub queries_dir: Option<PathBuf>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub format: Option<ReportFormat>,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
    Markdown,
}

/// Values supplied on the command line. They win over the file and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub organization: Option<String>,
    pub format: Option<ReportFormat>,
    pub output: Option<PathBuf>,
}

/// Resolved settings for one report run.
#[derive(Clone)]
pub struct ScoutConfig {
    pub organization: Option<String>,
    pub token: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
    pub queries_dir: Option<PathBuf>,
    pub format: ReportFormat,
    pub output_path: Option<PathBuf>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            organization: None,
            token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            queries_dir: None,
            format: ReportFormat::default(),
            output_path: None,
        }
    }
}

impl fmt::Debug for ScoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoutConfig")
            .field("organization", &self.organization)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("queries_dir", &self.queries_dir)
            .field("format", &self.format)
            .field("output_path", &self.output_path)
            .finish()
    }
}

impl ScoutConfig {
    /// Layer CLI overrides, file values, and environment lookups (in that order of
    /// precedence) over the defaults.
    pub fn resolve<F>(
        file: Option<&FileConfig>,
        overrides: &ConfigOverrides,
        env: F,
    ) -> Result<Self, ScoutError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let organization = overrides
            .organization
            .clone()
            .or_else(|| file.and_then(|c| c.organization.clone()))
            .or_else(|| env_var(&env, ORG_ENV_VAR, ORG_FALLBACK_ENV_VAR));

        let token = file
            .and_then(|c| c.token.as_deref())
            .and_then(|t| non_empty(resolve_credential(t, &env)))
            .or_else(|| env_var(&env, TOKEN_ENV_VAR, TOKEN_FALLBACK_ENV_VAR));

        let endpoint = file
            .and_then(|c| c.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ScoutError::Config(format!(
                "Invalid endpoint '{}': expected an http(s) URL",
                endpoint
            )));
        }

        let timeout_secs = file
            .and_then(|c| c.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ScoutError::Config("timeout_secs must be greater than zero".into()));
        }

        let file_output = file.and_then(|c| c.output.as_ref());
        let format = overrides
            .format
            .or_else(|| file_output.and_then(|o| o.format))
            .unwrap_or_default();
        let output_path = overrides
            .output
            .clone()
            .or_else(|| file_output.and_then(|o| o.path.clone()));

        Ok(Self {
            organization: non_empty(organization),
            token: non_empty(token),
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            queries_dir: file.and_then(|c| c.queries_dir.clone()),
            format,
            output_path,
        })
    }

    pub fn require_organization(&self) -> Result<&str, ScoutError> {
        self.organization.as_deref().ok_or_else(|| {
            ScoutError::Config(format!("{} environment variable not set.", ORG_ENV_VAR))
        })
    }

    pub fn require_token(&self) -> Result<&str, ScoutError> {
        self.token.as_deref().ok_or_else(|| {
            ScoutError::Config(format!("{} environment variable not set.", TOKEN_ENV_VAR))
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn env_var<F>(env: &F, name: &str, fallback: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(env(name)).or_else(|| env(fallback))
}
