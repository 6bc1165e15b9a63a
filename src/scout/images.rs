use serde_json::json;
use tracing::debug;

use crate::config::ScoutConfig;
use crate::errors::ScoutError;
use crate::graphql::{GraphQlTransport, ScoutQuery};
use crate::models::{Image, ImagePage};
use super::decode_field;

/// Images requested per `streamImages` page.
pub const PAGE_SIZE: usize = 25;

/// Enumerate every image of the configured organization, one page at a time.
///
/// Page 1 is requested without a `page` variable and tells us `totalCount`.
/// The remaining pages are then requested explicitly and appended in order.
/// `totalCount` is taken from page 1 and not re-checked on later pages.
pub async fn stream_images(
    client: &dyn GraphQlTransport,
    config: &ScoutConfig,
) -> Result<Vec<Image>, ScoutError> {
    let organization = config.require_organization()?;

    debug!(organization = %organization, "Requesting streamImages page 1");
    let first = fetch_page(client, organization, None).await?;
    let total_count = first.paging.total_count;
    let mut images = first.items;

    let pages = total_count.div_ceil(PAGE_SIZE);

    if images.len() < total_count {
        for page in 2..=pages {
            debug!(page, pages, "Requesting streamImages page");
            let next = fetch_page(client, organization, Some(page)).await?;
            images.extend(next.items);
        }
    }

    debug!(count = images.len(), total_count, "Image stream collected");
    Ok(images)
}

async fn fetch_page(
    client: &dyn GraphQlTransport,
    organization: &str,
    page: Option<usize>,
) -> Result<ImagePage, ScoutError> {
    let mut variables = json!({
        "organization": organization,
        "pageSize": PAGE_SIZE,
    });
    if let Some(page) = page {
        variables["page"] = json!(page);
    }

    let response = client.execute(ScoutQuery::StreamImages, variables).await?;
    Ok(decode_field::<ImagePage>(&response, "streamImages")?.unwrap_or_default())
}
