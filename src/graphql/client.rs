use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::credentials::redact_credentials;
use crate::config::{ScoutConfig, TOKEN_ENV_VAR};
use crate::errors::ScoutError;
use crate::utils::truncation::truncate_error;
use super::query::{QueryLoader, ScoutQuery};
use super::transport::GraphQlTransport;

/// GraphQL client for the Docker Scout API. One request per call, no retries.
pub struct ScoutClient {
    client: Client,
    endpoint: String,
    token: Option<String>,
    queries: QueryLoader,
}

impl ScoutClient {
    pub fn new(config: &ScoutConfig) -> Result<Self, ScoutError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("scout-cves/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScoutError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
            queries: QueryLoader::new(config.queries_dir.clone()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphQlTransport for ScoutClient {
    async fn execute(&self, query: ScoutQuery, variables: Value) -> Result<Value, ScoutError> {
        let token = self
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ScoutError::Config(format!("{} environment variable not set.", TOKEN_ENV_VAR))
            })?;

        let template = self.queries.load(query)?;
        let mut body = json!({
            "query": template.text,
            "variables": variables,
        });
        if let Some(operation_name) = &template.operation_name {
            body["operationName"] = json!(operation_name);
        }

        debug!(query = query.name(), endpoint = %self.endpoint, "Sending GraphQL request");

        let resp = self.client
            .post(&self.endpoint)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScoutError::Network(format!("GraphQL request timed out: {}", e))
                } else {
                    ScoutError::Network(format!("GraphQL request failed: {}", e))
                }
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let text = resp.text().await.unwrap_or_default();
            warn!(
                query = query.name(),
                status = status.as_u16(),
                body = %truncate_error(&redact_credentials(&text, &[token])),
                "GraphQL request rejected"
            );
            if status == StatusCode::UNAUTHORIZED {
                return Err(ScoutError::Authentication(format!(
                    "401 status running GraphQL request. Is your {} valid / expired?",
                    TOKEN_ENV_VAR
                )));
            }
            return Err(ScoutError::Request { status_code: status.as_u16() });
        }

        let text = resp.text().await
            .map_err(|e| ScoutError::Network(format!("Failed to read GraphQL response: {}", e)))?;
        let data: Value = serde_json::from_str(&text)
            .map_err(|e| ScoutError::Response(format!("GraphQL response is not valid JSON: {}", e)))?;

        if let Some(errors) = data.get("errors").and_then(Value::as_array) {
            for error in errors {
                warn!(
                    query = query.name(),
                    message = error["message"].as_str().unwrap_or("unknown GraphQL error"),
                    "GraphQL response carried an error"
                );
            }
        }

        Ok(data)
    }
}
