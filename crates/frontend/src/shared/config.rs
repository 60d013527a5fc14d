//! API location.
//!
//! The front-end talks to the backend through a same-origin proxy, so by
//! default requests go to the page origin. A deployment can point elsewhere
//! with `<meta name="api-base" content="https://...">`.

pub const API_BASE_META: &str = "api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Origin (and optional prefix) without trailing slash; empty means relative
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve from the current page: meta override, else the page origin.
    pub fn from_page() -> Self {
        let base_url = meta_api_base()
            .or_else(page_origin)
            .unwrap_or_default();
        Self::new(base_url)
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Joins base and path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{}", path)
    } else {
        format!("{}/{}", base, path)
    }
}
