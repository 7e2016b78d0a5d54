use crate::models::Blog;
use leptos::logging::warn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    NotFound,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub(crate) fn http(status: u16, message: impl std::fmt::Display, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {message}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Error payload used by every backend route: `{ "message": "..." }`.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

/// Pull the human-readable message out of an error response body.
///
/// Falls back to the raw body when it isn't the usual JSON shape (proxies,
/// HTML error pages).
pub(crate) fn error_message_from_body(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(b) => b.message,
        Err(_) => body.trim().to_string(),
    }
}

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_AUTOSAVE_MS: u64 = 5000;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub autosave_ms: u64,
}

impl EnvConfig {
    /// Read runtime configuration injected by the hosting page as `window.ENV`.
    pub fn new() -> Self {
        let mut api_url = None;
        let mut autosave_ms = None;

        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    // Accept both README style (UPPER_CASE) and lower-case keys.
                    api_url = read_env_key(&env, &["API_URL", "api_url"])
                        .and_then(|v| v.as_string());
                    autosave_ms = read_env_key(&env, &["AUTOSAVE_MS", "autosave_ms"]).and_then(
                        |v| v.as_f64().or_else(|| v.as_string().and_then(|s| s.parse().ok())),
                    );
                }
            }
        }

        Self::resolve(api_url, autosave_ms)
    }

    /// Apply defaults and validation to raw `window.ENV` values.
    pub fn resolve(api_url: Option<String>, autosave_ms: Option<f64>) -> Self {
        let api_url = api_url
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let autosave_ms = match autosave_ms {
            Some(ms) if ms.is_finite() && ms >= 1.0 => ms.round() as u64,
            Some(ms) => {
                warn!("ignoring invalid AUTOSAVE_MS={ms}; using {DEFAULT_AUTOSAVE_MS}");
                DEFAULT_AUTOSAVE_MS
            }
            None => DEFAULT_AUTOSAVE_MS,
        };

        Self {
            api_url,
            autosave_ms,
        }
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_ms)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

fn read_env_key(env: &wasm_bindgen::JsValue, keys: &[&str]) -> Option<wasm_bindgen::JsValue> {
    keys.iter().find_map(|k| {
        js_sys::Reflect::get(env, &(*k).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    })
}

/// Body of `save-draft` and `publish`.
///
/// `id` is omitted for documents that have never been persisted, which makes
/// the backend create a new one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SaveBlogRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Persistence operations backing the dashboard and the editor session.
pub(crate) trait BlogBackend {
    async fn list_blogs(&self) -> ApiResult<Vec<Blog>>;

    async fn fetch_blog(&self, id: &str) -> ApiResult<Blog>;

    async fn save_draft(&self, req: &SaveBlogRequest) -> ApiResult<Blog>;

    async fn publish(&self, req: &SaveBlogRequest) -> ApiResult<Blog>;

    async fn delete_blog(&self, id: &str) -> ApiResult<()>;
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub(crate) fn blog_path(id: &str) -> String {
        format!("/api/blogs/{}", urlencoding::encode(id))
    }

    async fn request_api<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let mut req = client.request(method, url);

        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            let message = error_message_from_body(&body);
            if status == 404 {
                Err(ApiError::not_found(message))
            } else {
                Err(ApiError::http(status, message, "Request failed"))
            }
        }
    }
}

impl BlogBackend for ApiClient {
    async fn list_blogs(&self) -> ApiResult<Vec<Blog>> {
        self.request_api(reqwest::Method::GET, "/api/blogs", None::<&()>)
            .await
    }

    async fn fetch_blog(&self, id: &str) -> ApiResult<Blog> {
        self.request_api(reqwest::Method::GET, &Self::blog_path(id), None::<&()>)
            .await
    }

    async fn save_draft(&self, req: &SaveBlogRequest) -> ApiResult<Blog> {
        self.request_api(reqwest::Method::POST, "/api/blogs/save-draft", Some(req))
            .await
    }

    async fn publish(&self, req: &SaveBlogRequest) -> ApiResult<Blog> {
        self.request_api(reqwest::Method::POST, "/api/blogs/publish", Some(req))
            .await
    }

    async fn delete_blog(&self, id: &str) -> ApiResult<()> {
        // The body is just a confirmation message.
        let _: serde_json::Value = self
            .request_api(reqwest::Method::DELETE, &Self::blog_path(id), None::<&()>)
            .await?;
        Ok(())
    }
}
