use tracing::{debug, info};

use crate::config::ScoutConfig;
use crate::errors::ScoutError;
use crate::graphql::GraphQlTransport;
use crate::models::{CveResult, Image, VulnerabilityPackage};
use crate::scout::{image_vulnerabilities, stream_images};
use super::events::ReportEvent;

/// Build the report rows for every image of the configured organization.
pub async fn generate_report_data(
    client: &dyn GraphQlTransport,
    config: &ScoutConfig,
) -> Result<Vec<CveResult>, ScoutError> {
    generate_report_data_with_events(client, config, &mut |_: &ReportEvent| {}).await
}

/// Same as [`generate_report_data`], reporting progress through `on_event`.
///
/// Rows keep the order images, then packages, then vulnerabilities were
/// returned in. Duplicates across images or packages are kept. The first
/// failed request aborts the whole run.
pub async fn generate_report_data_with_events(
    client: &dyn GraphQlTransport,
    config: &ScoutConfig,
    on_event: &mut (dyn FnMut(&ReportEvent) + Send),
) -> Result<Vec<CveResult>, ScoutError> {
    let images = stream_images(client, config).await?;

    if images.is_empty() {
        return Err(ScoutError::NoData("No images found for org/stream.".into()));
    }

    let total = images.len();
    info!(count = total, "Found images");
    on_event(&ReportEvent::ImagesDiscovered { count: total });

    let mut results = Vec::new();
    for (index, image) in images.iter().enumerate() {
        on_event(&ReportEvent::ImageStarted {
            index: index + 1,
            total,
            repo_name: image.repo_name.clone(),
            digest: image.digest.clone(),
        });
        debug!(repo = %image.repo_name, digest = %image.digest, "Getting vulnerabilities for image");

        let packages = image_vulnerabilities(client, config, &image.digest).await?;
        let before = results.len();
        results.extend(collect_findings(image, &packages));

        on_event(&ReportEvent::ImageCompleted { findings: results.len() - before });
    }

    info!(findings = results.len(), images = total, "Report data assembled");
    Ok(results)
}

/// Flatten an image's packages into report rows, keeping only CRITICAL and HIGH.
pub fn collect_findings<'a>(
    image: &'a Image,
    packages: &'a [VulnerabilityPackage],
) -> impl Iterator<Item = CveResult> + 'a {
    packages
        .iter()
        .flat_map(|package| package.vulnerabilities.iter())
        .filter_map(move |vuln| CveResult::from_finding(image, vuln))
}
