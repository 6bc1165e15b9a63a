use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::ScoutConfig;
use crate::errors::ScoutError;
use crate::graphql::{GraphQlTransport, ScoutQuery};
use crate::models::VulnerabilityPackage;
use super::decode_field;

#[derive(Debug, Deserialize)]
struct ImageVulnerabilities {
    #[serde(default)]
    vulnerabilities: Option<Vec<VulnerabilityPackage>>,
}

/// Fetch the vulnerability packages of one image. The API returns the whole
/// list in a single response.
pub async fn image_vulnerabilities(
    client: &dyn GraphQlTransport,
    config: &ScoutConfig,
    digest: &str,
) -> Result<Vec<VulnerabilityPackage>, ScoutError> {
    let organization = config.require_organization()?;
    let variables = json!({
        "organization": organization,
        "digest": digest,
    });

    let response = client.execute(ScoutQuery::ImageVulnerabilities, variables).await?;
    let packages = decode_field::<ImageVulnerabilities>(&response, "imageVulnerabilitiesByDigest")?
        .and_then(|v| v.vulnerabilities)
        .unwrap_or_default();

    debug!(digest = %digest, packages = packages.len(), "Fetched image vulnerabilities");
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::transport::fake::FakeTransport;
    use crate::models::Severity;

    fn config() -> ScoutConfig {
        ScoutConfig {
            organization: Some("acme".into()),
            token: Some("token".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_packages_for_digest() {
        let transport = FakeTransport::new(|_, _| {
            Ok(json!({
                "data": { "imageVulnerabilitiesByDigest": { "vulnerabilities": [
                    { "purl": "pkg:deb/debian/openssl@3.0.11", "vulnerabilities": [
                        { "sourceId": "CVE-2024-0727", "description": "PKCS12 NULL deref",
                          "cvss": { "severity": "MEDIUM" }, "epss": { "score": 0.01 } }
                    ] },
                    { "purl": "pkg:deb/debian/zlib@1.2.13", "vulnerabilities": [] }
                ] } }
            }))
        });

        let packages = image_vulnerabilities(&transport, &config(), "sha256:abc").await.unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].vulnerabilities[0].severity(), Some(Severity::Medium));

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, ScoutQuery::ImageVulnerabilities);
        assert_eq!(calls[0].1, json!({ "organization": "acme", "digest": "sha256:abc" }));
    }

    #[tokio::test]
    async fn test_null_result_is_empty() {
        let transport = FakeTransport::new(|_, _| {
            Ok(json!({ "data": { "imageVulnerabilitiesByDigest": null } }))
        });
        let packages = image_vulnerabilities(&transport, &config(), "sha256:none").await.unwrap();
        assert!(packages.is_empty());
    }

    #[tokio::test]
    async fn test_null_strings_do_not_abort_the_fetch() {
        let transport = FakeTransport::new(|_, _| {
            Ok(json!({
                "data": { "imageVulnerabilitiesByDigest": { "vulnerabilities": [
                    { "purl": null, "vulnerabilities": [
                        { "sourceId": "CVE-2024-0100", "description": null,
                          "cvss": { "severity": "LOW" }, "epss": null }
                    ] },
                    { "purl": "pkg:npm/lodash@4.17.20", "vulnerabilities": null }
                ] } }
            }))
        });

        let packages = image_vulnerabilities(&transport, &config(), "sha256:abc").await.unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].vulnerabilities[0].description, "");
        assert!(packages[1].vulnerabilities.is_empty());
    }

    #[tokio::test]
    async fn test_client_error_propagates_unchanged() {
        let transport = FakeTransport::new(|_, _| {
            Err(ScoutError::Authentication("expired".into()))
        });
        let result = image_vulnerabilities(&transport, &config(), "sha256:abc").await;
        assert!(matches!(result, Err(ScoutError::Authentication(_))));
    }
}
