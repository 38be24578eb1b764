//! `localStorage` backed session store

use shared::session::SessionStore;
use web_sys::Storage;

/// [`SessionStore`] over the window's `localStorage`.
///
/// When storage is unavailable (private mode, sandboxed iframe) reads return
/// nothing and writes are dropped, so the app behaves as signed out.
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[STORAGE] localStorage unavailable, session will not persist");
        }
        Self { storage }
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("[STORAGE] Failed to write '{}': {:?}", key, e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            storage.remove_item(key).ok();
        }
    }
}
