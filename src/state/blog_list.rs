use crate::api::{ApiClient, ApiResult, BlogBackend};
use crate::models::Blog;
use crate::toast::Toasts;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Dashboard post list.
#[derive(Clone, Copy)]
pub(crate) struct BlogList {
    pub blogs: RwSignal<Vec<Blog>>,
    pub loading: RwSignal<bool>,

    /// Load guard: ignore responses from superseded requests.
    request_id: RwSignal<u64>,
}

impl BlogList {
    pub fn new() -> Self {
        Self {
            blogs: RwSignal::new(vec![]),
            loading: RwSignal::new(false),
            request_id: RwSignal::new(0),
        }
    }

    /// Drafts and published posts, each in server (most recent first) order.
    pub fn partitioned(&self) -> (Vec<Blog>, Vec<Blog>) {
        split_by_status(&self.blogs.get())
    }

    pub fn fetch(&self, api_client: ApiClient, toasts: Toasts) {
        let rid = self.request_id.get_untracked().wrapping_add(1);
        self.request_id.set(rid);
        self.loading.set(true);

        let list = *self;
        spawn_local(async move {
            let result = api_client.list_blogs().await;

            if list.request_id.get_untracked() != rid {
                return;
            }

            match result {
                Ok(blogs) => list.blogs.set(blogs),
                Err(e) => {
                    warn!("failed to fetch posts ({:?}): {e}", e.kind);
                    toasts.error("Failed to fetch blogs");
                }
            }
            list.loading.set(false);
        });
    }

    pub async fn delete(self, api_client: ApiClient, toasts: Toasts, id: String) -> ApiResult<()> {
        match api_client.delete_blog(&id).await {
            Ok(()) => {
                self.blogs.update(|blogs| {
                    remove_blog(blogs, &id);
                });
                toasts.success("Blog deleted successfully");
                Ok(())
            }
            Err(e) => {
                warn!("failed to delete post {id} ({:?}): {e}", e.kind);
                toasts.error("Failed to delete blog");
                Err(e)
            }
        }
    }
}

impl Default for BlogList {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn split_by_status(blogs: &[Blog]) -> (Vec<Blog>, Vec<Blog>) {
    blogs.iter().cloned().partition(|b| !b.is_published())
}

pub(crate) fn remove_blog(blogs: &mut Vec<Blog>, id: &str) -> bool {
    let before = blogs.len();
    blogs.retain(|b| b.id != id);
    blogs.len() != before
}
