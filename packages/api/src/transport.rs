//! # HTTP transport
//!
//! [`ApiRequest`] and [`ApiResponse`] are plain values so the authentication
//! layers in [`crate::client`] can inspect, rewrite and resend a request without
//! touching the network stack. [`HttpTransport`] is the only seam that performs
//! I/O; [`ReqwestTransport`] implements it on top of `reqwest` for both native
//! and WASM targets.

use std::future::Future;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::config::{join_url, ApiConfig};

use crate::error::ApiError;

/// A request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path, e.g. `/manager/agents`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Access token sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    /// Set once the request has been resent after a refresh.
    pub(crate) retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Whether the request has already been resent after a refresh.
    pub fn is_retry(&self) -> bool {
        self.retried
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The backend's `message` field, when the body is a JSON error object.
    pub fn message(&self) -> Option<String> {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
    }

    /// Turn a non-success status into [`ApiError::Status`].
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        let fallback = format!("Request failed with status {}", self.status);
        self.error_for_status_or(&fallback)
    }

    /// Like [`error_for_status`](Self::error_for_status), with `fallback` used
    /// when the backend sent no message.
    pub fn error_for_status_or(self, fallback: &str) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(ApiError::Status {
            status: self.status,
            message: self.message().unwrap_or_else(|| fallback.to_string()),
        })
    }
}

/// Sends a single request and returns whatever the server answered.
///
/// Implementations must not interpret status codes; only failures to obtain a
/// response at all are errors ([`ApiError::Network`]).
pub trait HttpTransport {
    fn send(&self, request: &ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// `reqwest`-backed transport rooted at a base URL.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let client = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = join_url(&self.base_url, &request.path);
        let mut builder = self.client.request(request.method.clone(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        tracing::trace!(method = %request.method, %url, status, "response received");
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_extracted() {
        let response = ApiResponse::new(400, r#"{"message":"Email already registered"}"#);
        assert_eq!(response.message().as_deref(), Some("Email already registered"));

        match response.error_for_status() {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Email already registered");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_message_falls_back_to_status() {
        let err = ApiResponse::new(502, "<html>bad gateway</html>")
            .error_for_status()
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::get("/manager/reports").query("period", "WEEKLY");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.query, vec![("period".into(), "WEEKLY".into())]);
        assert!(!request.is_retry());

        let request = ApiRequest::post("/auth/refresh-token")
            .json(&serde_json::json!({ "refreshToken": "R1" }))
            .unwrap();
        assert_eq!(request.body.unwrap()["refreshToken"], "R1");
    }
}
