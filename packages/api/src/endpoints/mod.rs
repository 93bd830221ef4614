//! Typed wrappers over the dashboard's REST endpoints.
//!
//! Each submodule adds methods to [`ApiClient`](crate::ApiClient); they all go
//! through [`ApiClient::execute`](crate::ApiClient::execute) and so share its
//! token handling.

mod admin;
mod agents;
mod profile;
mod reports;
