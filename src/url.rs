use crate::core::selection::{
    query_param, with_query_param, without_query_param, Selection, SelectionStore, SELECTION_PARAM,
};
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn location_search() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Selection backed by the `id` query parameter.
///
/// Writes push a history entry so the browser back button walks back through
/// previous selections, ending in the overview.
pub struct UrlSelection {
    inner: Selection,
}

impl UrlSelection {
    pub fn from_location() -> Self {
        let initial = query_param(&location_search(), SELECTION_PARAM);
        if let Some(id) = &initial {
            log::info!("[selection] initial id={}", id);
        }
        Self {
            inner: Selection::new(initial),
        }
    }

    #[inline]
    pub fn get(&self) -> Option<&str> {
        self.inner.get()
    }

    /// Re-read the query parameter after history navigation.
    pub fn sync_from_location(&mut self) {
        match query_param(&location_search(), SELECTION_PARAM) {
            Some(id) => {
                if self.inner.set(&id) {
                    log::info!("[selection] history -> {}", id);
                }
            }
            None => {
                if self.inner.clear() {
                    log::info!("[selection] history -> overview");
                }
            }
        }
    }

    fn push_search(search: &str) {
        let Some(window) = web::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let hash = location.hash().unwrap_or_default();
        let url = format!("{}{}{}", path, search, hash);
        if let Ok(history) = window.history() {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
                log::warn!("[selection] pushState failed: {:?}", e);
            }
        }
    }
}

impl SelectionStore for UrlSelection {
    fn selection(&self) -> Option<String> {
        self.inner.selection()
    }

    fn set_selection(&mut self, id: &str) {
        if self.inner.set(id) {
            log::info!("[selection] {} (rev {})", id, self.inner.revision());
            Self::push_search(&with_query_param(&location_search(), SELECTION_PARAM, id));
        }
    }

    fn clear_selection(&mut self) {
        if self.inner.clear() {
            log::info!("[selection] cleared (rev {})", self.inner.revision());
            Self::push_search(&without_query_param(&location_search(), SELECTION_PARAM));
        }
    }
}
