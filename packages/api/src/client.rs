//! # Authenticated API client
//!
//! [`ApiClient`] wraps an [`HttpTransport`] with two layers of token handling:
//!
//! 1. **Pre-flight.** Before a request leaves, the stored access token is checked
//!    against the clock. A fresh token is attached as-is; an expired one is
//!    refreshed first, and if that fails the request is never sent.
//! 2. **Reactive.** A `401` on the first attempt triggers a refresh and exactly
//!    one resend with the new token. A second `401` clears the session.
//!
//! Refreshes are single-flight: they run under one async mutex, and a caller
//! that finds a newer valid token once it holds the lock reuses it instead of
//! spending the (rotating) refresh token again.
//!
//! Requests built with [`ApiClient::send_public`] skip both layers; login and
//! forgot-password use it.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::token::{is_expired, Clock, SystemClock};
use store::{DashboardConfig, SessionStore};
use tokio::sync::Mutex;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Body returned by the refresh endpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// HTTP client bound to the process' [`SessionStore`].
#[derive(Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    session: SessionStore,
    clock: Arc<dyn Clock + Send + Sync>,
    refresh_lock: Arc<Mutex<()>>,
    refresh_path: String,
}

impl<T> fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("session", &self.session)
            .field("refresh_path", &self.refresh_path)
            .finish_non_exhaustive()
    }
}

impl<T> PartialEq for ApiClient<T> {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && Arc::ptr_eq(&self.refresh_lock, &other.refresh_lock)
    }
}

impl ApiClient<ReqwestTransport> {
    /// Client talking to `config.api.base_url` over HTTP.
    pub fn new(config: &DashboardConfig, session: SessionStore) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(&config.api)?;
        Ok(Self::with_transport(
            transport,
            session,
            config.api.refresh_path.clone(),
        ))
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(transport: T, session: SessionStore, refresh_path: String) -> Self {
        Self {
            transport,
            session,
            clock: Arc::new(SystemClock),
            refresh_lock: Arc::new(Mutex::new(())),
            refresh_path,
        }
    }

    /// Replace the clock used for expiry checks.
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send a request through both authentication layers.
    ///
    /// Non-success statuses other than `401` come back as [`ApiError::Status`]
    /// and leave the session untouched.
    pub async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request.bearer = self.preflight_token().await?;
        loop {
            let response = self.transport.send(&request).await?;
            if response.status != 401 {
                return response.error_for_status();
            }
            if request.retried {
                tracing::warn!(path = %request.path, "request rejected after token refresh");
                self.session.logout();
                return Err(ApiError::AuthRejected);
            }
            if self.session.refresh_token().is_none() {
                tracing::info!(path = %request.path, "unauthorized and no refresh token; signing out");
                self.session.logout();
                return Err(ApiError::Unauthenticated);
            }
            tracing::debug!(path = %request.path, "unauthorized; refreshing and retrying once");
            let token = self.refresh(request.bearer.as_deref()).await?;
            request.bearer = Some(token);
            request.retried = true;
        }
    }

    /// Send a request without attaching or refreshing tokens.
    ///
    /// The response is returned whatever its status; a `401` here does not
    /// touch the session.
    pub async fn send_public(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request.bearer = None;
        self.transport.send(&request).await
    }

    /// Execute and deserialize the response body.
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        self.execute(request).await?.json()
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.fetch(ApiRequest::get(path)).await
    }

    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.fetch(ApiRequest::post(path).json(body)?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(path)).await.map(|_| ())
    }

    /// Token to attach to an outgoing request, refreshing it first if it has expired.
    async fn preflight_token(&self) -> Result<Option<String>, ApiError> {
        let Some(token) = self.session.access_token() else {
            return Ok(None);
        };
        if !is_expired(&token, self.clock.now()) {
            return Ok(Some(token));
        }
        tracing::debug!("access token expired; refreshing before send");
        self.refresh(Some(&token)).await.map(Some)
    }

    /// Obtain a usable access token to replace `stale`.
    async fn refresh(&self, stale: Option<&str>) -> Result<String, ApiError> {
        let _guard = self.refresh_lock.lock().await;

        let epoch = self.session.epoch();
        let session = self.session.snapshot();
        if let Some(current) = session.token.as_deref() {
            if Some(current) != stale && !is_expired(current, self.clock.now()) {
                tracing::trace!("reusing token refreshed by a concurrent request");
                return Ok(current.to_string());
            }
        }

        let Some(refresh_token) = session.refresh_token else {
            self.session.logout();
            return Err(ApiError::NoRefreshToken);
        };

        match self.request_refresh(&refresh_token).await {
            Ok(pair) => {
                let token = pair.token.clone();
                if !self
                    .session
                    .update_tokens_if_current(epoch, pair.token, pair.refresh_token)
                {
                    return Err(ApiError::Unauthenticated);
                }
                tracing::debug!("access token refreshed");
                Ok(token)
            }
            Err(e) => {
                tracing::info!(error = %e, "token refresh failed; signing out");
                self.session.logout();
                Err(e)
            }
        }
    }

    async fn request_refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError> {
        let request =
            ApiRequest::post(self.refresh_path.as_str()).json(&RefreshRequest { refresh_token })?;
        let response = self
            .transport
            .send(&request)
            .await
            .map_err(|e| ApiError::RefreshFailed(e.to_string()))?;
        if !response.is_success() {
            let message = response
                .message()
                .unwrap_or_else(|| format!("status {}", response.status));
            return Err(ApiError::RefreshFailed(message));
        }
        response
            .json()
            .map_err(|e| ApiError::RefreshFailed(e.to_string()))
    }
}
