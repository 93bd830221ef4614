//! Platform-specific construction of the session store and API client.
//!
//! The session is persisted through a [`store::SessionBackend`] picked per target:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageBackend`]
//! - **Desktop / Mobile** (native): `<data_dir>/ops-dashboard/<key>.json` via [`store::FileBackend`]
//! - anything else: in memory only

use api::{ApiClient, ApiError};
use store::{DashboardConfig, SessionStore};

/// Load the persisted session once, falling back to an empty one.
pub fn make_session_store(config: &DashboardConfig) -> SessionStore {
    let key = config.session.storage_key.as_str();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::load(store::LocalStorageBackend::new(key))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = key;
        SessionStore::load(store::MemoryBackend::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("ops-dashboard");
        SessionStore::load(store::FileBackend::new(base, key))
    }
}

/// HTTP client bound to `session`.
pub fn make_client(config: &DashboardConfig, session: SessionStore) -> Result<ApiClient, ApiError> {
    ApiClient::new(config, session)
}
