use serde::{Deserialize, Serialize};

/// Publication state of a post.
///
/// Serialized lowercase to match the backend's `status` field.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum BlogStatus {
    #[default]
    Draft,
    Published,
}

/// Blog post as returned by the backend document store.
///
/// The store adds bookkeeping fields (`__v`, ...) which we ignore.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Blog {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub status: BlogStatus,

    #[serde(rename = "createdAt", default)]
    pub created_at: String,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

impl Blog {
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == BlogStatus::Published
    }
}
