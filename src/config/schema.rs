use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "organization": { "type": "string", "minLength": 1 },
            "token": { "type": "string", "minLength": 1 },
            "endpoint": { "type": "string", "format": "uri" },
            "timeout_secs": { "type": "integer", "minimum": 1 },
            "queries_dir": { "type": "string" },
            "output": {
                "type": "object",
                "properties": {
                    "format": { "type": "string", "enum": ["text", "json", "csv", "markdown"] },
                    "path": { "type": "string" }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
});
