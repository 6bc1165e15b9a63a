use std::path::Path;
use crate::errors::ScoutError;
use super::types::FileConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<FileConfig, ScoutError> {
    if !path.exists() {
        return Err(ScoutError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(ScoutError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<FileConfig, ScoutError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok(FileConfig::default());
    }

    validate_schema(&yaml)?;

    let config: FileConfig = serde_yaml::from_value(yaml)?;
    Ok(config)
}

/// Validate config against the JSON schema. Violations are logged, not fatal.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), ScoutError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| ScoutError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| ScoutError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}
