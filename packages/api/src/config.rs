//! Native start-up configuration: `dashboard.toml` plus environment overrides.
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `DASHBOARD_API_URL` | `api.base_url` |
//! | `DASHBOARD_REFRESH_PATH` | `api.refresh_path` |
//! | `DASHBOARD_TIMEOUT_SECS` | `api.timeout_secs` |
//!
//! Variables are also read from a `.env` file in the working directory.

use std::path::Path;

use store::DashboardConfig;

/// Load `path` and apply environment overrides.
pub fn load_config(path: &Path) -> DashboardConfig {
    overlay_env(load_config_file(path))
}

/// Read `path` if it exists, falling back to defaults on any error.
pub fn load_config_file(path: &Path) -> DashboardConfig {
    match std::fs::read_to_string(path) {
        Ok(text) => DashboardConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
            DashboardConfig::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => DashboardConfig::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "could not read config: {e}");
            DashboardConfig::default()
        }
    }
}

/// Apply environment overrides on top of `config`.
pub fn overlay_env(config: DashboardConfig) -> DashboardConfig {
    dotenvy::dotenv().ok();
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(
    mut config: DashboardConfig,
    var: impl Fn(&str) -> Option<String>,
) -> DashboardConfig {
    if let Some(url) = var("DASHBOARD_API_URL").filter(|v| !v.trim().is_empty()) {
        config.api.base_url = url;
    }
    if let Some(path) = var("DASHBOARD_REFRESH_PATH").filter(|v| !v.trim().is_empty()) {
        config.api.refresh_path = path;
    }
    if let Some(secs) = var("DASHBOARD_TIMEOUT_SECS") {
        match secs.parse() {
            Ok(secs) => config.api.timeout_secs = secs,
            Err(_) => tracing::warn!(value = %secs, "DASHBOARD_TIMEOUT_SECS is not a number"),
        }
    }
    config
}
