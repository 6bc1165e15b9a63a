pub mod images;
pub mod vulnerabilities;

pub use images::{stream_images, PAGE_SIZE};
pub use vulnerabilities::image_vulnerabilities;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ScoutError;

/// Decode `data.<field>` from a GraphQL response. A null or absent field is
/// `None` unless the response also reports GraphQL errors.
pub(crate) fn decode_field<T: DeserializeOwned>(
    response: &Value,
    field: &str,
) -> Result<Option<T>, ScoutError> {
    match response.get("data").and_then(|d| d.get(field)) {
        Some(value) if !value.is_null() => T::deserialize(value)
            .map(Some)
            .map_err(|e| ScoutError::Response(format!("Malformed {} payload: {}", field, e))),
        _ => match first_graphql_error(response) {
            Some(message) => Err(ScoutError::Response(format!(
                "GraphQL error in {}: {}",
                field, message
            ))),
            None => Ok(None),
        },
    }
}

fn first_graphql_error(response: &Value) -> Option<String> {
    response
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .map(|e| e["message"].as_str().unwrap_or("unknown GraphQL error").to_string())
}
