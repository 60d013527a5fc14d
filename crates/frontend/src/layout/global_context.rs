use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level screens reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPage {
    OrderEntry,
    PeriodAvailability,
}

impl AppPage {
    pub fn all() -> [AppPage; 2] {
        [AppPage::OrderEntry, AppPage::PeriodAvailability]
    }

    /// Value of the `?page=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            AppPage::OrderEntry => "new-order",
            AppPage::PeriodAvailability => "periods",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppPage::OrderEntry => "New order",
            AppPage::PeriodAvailability => "Delivery periods",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<AppPage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(AppPage::OrderEntry),
        }
    }

    pub fn open(&self, page: AppPage) {
        self.page.set(page);
    }

    /// Restores the page from `?page=` and keeps the URL in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|k| AppPage::from_key(k)) {
            self.page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("page".to_string(), page.key().to_string())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_roundtrip() {
        for page in AppPage::all() {
            assert_eq!(AppPage::from_key(page.key()), Some(page));
        }
        assert_eq!(AppPage::from_key("kitchen"), None);
    }
}
