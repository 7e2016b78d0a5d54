mod blog_list;

pub(crate) use blog_list::BlogList;

use crate::api::{ApiClient, EnvConfig};
use crate::toast::Toasts;

/// Services shared by every page: the backend client, runtime configuration
/// and the toast queue.
///
/// Page data (the dashboard list, the post being edited) is owned by the page
/// that shows it, not stored here.
#[derive(Clone)]
pub(crate) struct AppState {
    pub config: EnvConfig,
    pub api_client: ApiClient,
    pub toasts: Toasts,
}

impl AppState {
    pub fn new() -> Self {
        let config = EnvConfig::new();
        Self {
            api_client: ApiClient::from_config(&config),
            config,
            toasts: Toasts::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
