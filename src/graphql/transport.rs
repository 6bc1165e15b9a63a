use async_trait::async_trait;
use serde_json::Value;
use crate::errors::ScoutError;
use super::query::ScoutQuery;

/// Executes a named GraphQL operation and returns the raw response body.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    async fn execute(&self, query: ScoutQuery, variables: Value) -> Result<Value, ScoutError>;
}
