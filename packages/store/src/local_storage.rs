//! # Browser `localStorage` session persistence
//!
//! [`LocalStorageBackend`] is the [`SessionBackend`] used on the **web
//! platform**. The serialized session lives under a single key (default
//! `"auth-storage"`) so it survives reloads of the tab.
//!
//! The backend holds only the key and looks up `window.localStorage` on every
//! call; `web_sys::Storage` is not `Send`, and the lookup is cheap.
//!
//! ## Error handling
//!
//! Storage can be missing (private browsing, sandboxed iframes) or full. Reads
//! then return `None` and writes are dropped with a warning, so the dashboard
//! degrades to a session that lasts only as long as the tab.

use crate::session::SessionBackend;

/// localStorage-backed SessionBackend for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageBackend {
    key: String,
}

impl LocalStorageBackend {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionBackend for LocalStorageBackend {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    fn save(&self, raw: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable; session will not persist");
            return;
        };
        if storage.set_item(&self.key, raw).is_err() {
            tracing::warn!(key = %self.key, "failed to write session to localStorage");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
