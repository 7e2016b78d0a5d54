use crate::api::SaveBlogRequest;
use crate::models::Blog;

/// Editable fields of a post, as held by an editor session.
///
/// The same shape serves as the live draft (what the user currently sees) and
/// as the snapshot (what the backend last acknowledged).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DocumentFields {
    /// Absent until the backend has assigned an id.
    pub id: Option<String>,
    pub title: String,
    /// Tag input text exactly as typed, e.g. `"rust, wasm"`.
    pub tags_raw: String,
    /// Serialized rich-text content (HTML).
    pub content: String,
}

impl DocumentFields {
    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            id: Some(blog.id.clone()),
            title: blog.title.clone(),
            tags_raw: join_tags(&blog.tags),
            content: blog.content.clone(),
        }
    }

    /// Nothing worth persisting: both title and content are blank.
    pub fn is_vacuous(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    pub fn tags(&self) -> Vec<String> {
        parse_tags(&self.tags_raw)
    }

    pub fn to_request(&self) -> SaveBlogRequest {
        let title = if self.title.is_empty() {
            "Untitled".to_string()
        } else {
            self.title.clone()
        };

        SaveBlogRequest {
            id: self.id.clone(),
            title,
            content: self.content.clone(),
            tags: self.tags(),
        }
    }
}

/// Whether `live` differs from `snapshot` in any tracked field.
///
/// Comparison is byte-exact on purpose; the id is not a tracked field.
pub(crate) fn is_dirty(live: &DocumentFields, snapshot: &DocumentFields) -> bool {
    live.content != snapshot.content
        || live.title != snapshot.title
        || live.tags_raw != snapshot.tags_raw
}

pub(crate) fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
