use tracing::debug;

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve it through `env`. An unset
/// reference resolves to `None`, never to the `$VAR` text itself.
pub fn resolve_credential<F>(value: &str, env: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(var_name) = value.strip_prefix('$') else {
        return Some(value.to_string());
    };
    match env(var_name) {
        Some(resolved) => {
            debug!(var = %var_name, "Resolved credential from environment");
            Some(resolved)
        }
        None => {
            debug!(var = %var_name, "Credential environment variable not set");
            None
        }
    }
}

/// Redact sensitive values in a string. Replaces each secret with [REDACTED].
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    let mut result = text.to_string();
    for secret in secrets {
        if !secret.is_empty() && secret.len() >= 4 {
            result = result.replace(secret, "[REDACTED]");
        }
    }
    result
}
