//! # Dashboard configuration: `dashboard.toml`
//!
//! Defines the TOML configuration consumed by the dashboard client
//! (filename: [`DashboardConfig::filename`] = `"dashboard.toml"`). It is read once
//! at start-up and handed to the API client, the session store and the tables.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"
//! refresh_path = "/auth/refresh-token"
//! timeout_secs = 30
//!
//! [session]
//! storage_key = "auth-storage"
//!
//! [table]
//! rows_per_page = 5
//! page_size_options = [5, 10, 20]
//! mobile_columns = 2
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config with builder helpers, TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Backend base URL, refresh endpoint path and request timeout. |
//! | [`SessionConfig`] | Key under which the session is persisted. |
//! | [`TableConfig`] | Default page size, selectable page sizes and the card-view column limit. |
//!
//! Every section derives `Default` with production defaults, so a missing or
//! empty file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub table: TableConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the token refresh endpoint, relative to `base_url`.
    #[serde(default = "default_refresh_path")]
    pub refresh_path: String,
    /// Request timeout in seconds. Ignored in the browser.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_refresh_path() -> String {
    "/auth/refresh-token".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            refresh_path: default_refresh_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "auth-storage".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

/// Defaults for the paginated tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    /// Columns shown per card on narrow viewports when no column opts out explicitly.
    #[serde(default = "default_mobile_columns")]
    pub mobile_columns: usize,
}

fn default_rows_per_page() -> usize {
    5
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 20]
}

fn default_mobile_columns() -> usize {
    2
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: default_rows_per_page(),
            page_size_options: default_page_size_options(),
            mobile_columns: default_mobile_columns(),
        }
    }
}

impl DashboardConfig {
    /// Builder method to point the client at another backend.
    pub fn with_api_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the default page size.
    pub fn with_rows_per_page(mut self, rows: usize) -> Self {
        self.table.rows_per_page = rows;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Full URL of the refresh endpoint.
    pub fn refresh_url(&self) -> String {
        join_url(&self.api.base_url, &self.api.refresh_path)
    }
}

/// Join a base URL and an endpoint path without doubling or dropping the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
