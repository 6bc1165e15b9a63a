use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use regex::Regex;
use crate::errors::ScoutError;
use tracing::debug;

static OPERATION_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*query\s+([A-Za-z_][A-Za-z0-9_]*)").expect("operation name regex is valid")
});

/// The GraphQL operations issued against Docker Scout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoutQuery {
    StreamImages,
    ImageVulnerabilities,
}

impl ScoutQuery {
    pub fn name(&self) -> &'static str {
        match self {
            ScoutQuery::StreamImages => "stream-images",
            ScoutQuery::ImageVulnerabilities => "image-vulnerabilities",
        }
    }

    fn file_name(&self) -> String {
        format!("{}.query", self.name())
    }

    fn embedded(&self) -> &'static str {
        match self {
            ScoutQuery::StreamImages => include_str!("../../queries/stream-images.query"),
            ScoutQuery::ImageVulnerabilities => {
                include_str!("../../queries/image-vulnerabilities.query")
            }
        }
    }
}

/// Query text plus the operation name declared in it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    pub text: String,
    pub operation_name: Option<String>,
}

impl QueryTemplate {
    fn parse(text: String) -> Self {
        let operation_name = OPERATION_NAME_RE
            .captures(&text)
            .map(|cap| cap[1].to_string());
        Self { text, operation_name }
    }
}

/// Resolves query templates, either from a directory of `<name>.query` files or
/// from the copies compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct QueryLoader {
    queries_dir: Option<PathBuf>,
}

impl QueryLoader {
    pub fn new(queries_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = &queries_dir {
            debug!(dir = %dir.display(), "QueryLoader using query directory");
        }
        Self { queries_dir }
    }

    pub fn embedded() -> Self {
        Self { queries_dir: None }
    }

    pub fn load(&self, query: ScoutQuery) -> Result<QueryTemplate, ScoutError> {
        let text = match &self.queries_dir {
            Some(dir) => read_query_file(&dir.join(query.file_name()))?,
            None => query.embedded().to_string(),
        };
        if text.trim().is_empty() {
            return Err(ScoutError::Query(format!("Query '{}' is empty", query.name())));
        }
        Ok(QueryTemplate::parse(text))
    }

    pub fn queries_dir(&self) -> Option<&Path> {
        self.queries_dir.as_deref()
    }
}

fn read_query_file(path: &Path) -> Result<String, ScoutError> {
    if !path.exists() {
        return Err(ScoutError::Query(format!("Query file not found: {}", path.display())));
    }
    std::fs::read_to_string(path)
        .map_err(|e| ScoutError::Query(format!("Failed to read query {}: {}", path.display(), e)))
}
