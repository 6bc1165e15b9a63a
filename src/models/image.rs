use serde::{Deserialize, Serialize};

/// A container image discovered in the organization's image stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ImageItem")]
pub struct Image {
    pub digest: String,
    pub repo_name: String,
}

/// Wire shape of an entry in `streamImages.items`.
#[derive(Debug, Deserialize)]
struct ImageItem {
    #[serde(default)]
    digest: Option<String>,
    #[serde(default)]
    repository: Option<RepositoryRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryRef {
    #[serde(default)]
    repo_name: Option<String>,
}

impl From<ImageItem> for Image {
    fn from(item: ImageItem) -> Self {
        Self {
            digest: item.digest.unwrap_or_default(),
            repo_name: item
                .repository
                .and_then(|r| r.repo_name)
                .unwrap_or_default(),
        }
    }
}

/// One page of the `streamImages` query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagePage {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub items: Vec<Image>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub paging: Paging,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_count: usize,
}
