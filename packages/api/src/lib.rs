//! # API crate: backend client for the operations dashboard
//!
//! Everything the frontends need to talk to the dashboard backend: a transport
//! seam, an authenticated client that keeps the access token fresh, the
//! backend's data models, and the form checks run before a request is sent.
//!
//! ## Modules
//!
//! | Module | Target | Purpose |
//! |--------|--------|---------|
//! | [`client`] | all | [`ApiClient`]: bearer attachment, pre-flight and reactive token refresh, single-flight coalescing |
//! | [`transport`] | all | [`ApiRequest`] / [`ApiResponse`] values and the [`HttpTransport`] seam, with a `reqwest` implementation |
//! | [`error`] | all | [`ApiError`], distinguishing session-ending auth failures from ordinary request failures |
//! | [`auth`] | all | Login, forgot-password, local logout |
//! | [`models`] | all | Agents, managers, reports, dashboard figures, profile, notifications |
//! | [`validation`] | all | Email, required-field, strong-password and creation-form checks |
//! | [`config`] | native | `dashboard.toml` loading with `DASHBOARD_*` environment overrides (`dotenvy`) |
//!
//! ## Endpoints
//!
//! Typed wrappers are inherent methods on [`ApiClient`]:
//!
//! - **Auth** (public): `login`, `forgot_password`, plus local `logout`
//! - **Manager**: `list_agents`, `create_agent`, `delete_agent`, `list_reports`, `dashboard_summary`
//! - **Admin**: `list_managers`, `create_manager`, `delete_manager`, `reset_user_password`,
//!   `list_notifications`, `mark_notification_read`
//! - **Profile**: `profile`, `remove_profile_image`, `set_password`

pub mod auth;
pub mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
mod endpoints;
pub mod error;
pub mod models;
pub mod transport;
pub mod validation;

#[cfg(test)]
mod testing;

pub use auth::{LoginCredentials, LoginResponse};
pub use client::ApiClient;
pub use error::ApiError;
pub use models::*;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};

pub use store::{DashboardConfig, Role, Session, SessionStore, UserIdentity};
