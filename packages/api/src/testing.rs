//! In-process fake backend for client tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use store::token::Clock;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};

pub(crate) const NOW: u64 = 1_700_000_000;
pub(crate) const REFRESH_PATH: &str = "/auth/refresh-token";

pub(crate) fn token_expiring_at(subject: &str, exp: u64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{subject}","exp":{exp}}}"#));
    format!("{header}.{body}.sig")
}

pub(crate) fn fresh_token(subject: &str) -> String {
    token_expiring_at(subject, NOW + 3600)
}

pub(crate) fn expired_token(subject: &str) -> String {
    token_expiring_at(subject, NOW - 60)
}

#[derive(Clone, Copy)]
pub(crate) struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

#[derive(Default)]
struct FakeState {
    accepted: HashSet<String>,
    /// Single-use refresh tokens and the pair each one is exchanged for.
    refresh: HashMap<String, (String, String)>,
    routes: HashMap<String, (u16, String)>,
    forced: VecDeque<(String, u16)>,
    offline: bool,
    calls: Vec<ApiRequest>,
}

/// Fake API server. Every path outside `/auth/` requires an accepted bearer token.
#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn accept(&self, token: &str) -> &Self {
        self.state.lock().unwrap().accepted.insert(token.to_string());
        self
    }

    /// Exchange `refresh` once for `(token, next_refresh)`; `token` becomes accepted.
    pub(crate) fn issue(&self, refresh: &str, token: &str, next_refresh: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .refresh
            .insert(refresh.into(), (token.into(), next_refresh.into()));
        self.accept(token)
    }

    pub(crate) fn route(&self, path: &str, status: u16, body: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert(path.into(), (status, body.into()));
        self
    }

    /// Answer the next request to `path` with `status`, whatever its token.
    pub(crate) fn force_next(&self, path: &str, status: u16) -> &Self {
        self.state
            .lock()
            .unwrap()
            .forced
            .push_back((path.into(), status));
        self
    }

    pub(crate) fn go_offline(&self) {
        self.state.lock().unwrap().offline = true;
    }

    pub(crate) fn calls_to(&self, path: &str) -> Vec<ApiRequest> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| call.path == path)
            .cloned()
            .collect()
    }

    fn respond(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(request.clone());
        if state.offline {
            return Err(ApiError::Network("connection refused".into()));
        }

        if let Some(index) = state.forced.iter().position(|(p, _)| *p == request.path) {
            if let Some((_, status)) = state.forced.remove(index) {
                return Ok(ApiResponse::new(status, r#"{"message":"forced"}"#));
            }
        }

        if request.path == REFRESH_PATH {
            let presented = request
                .body
                .as_ref()
                .and_then(|body| body["refreshToken"].as_str())
                .unwrap_or_default()
                .to_string();
            return Ok(match state.refresh.remove(&presented) {
                Some((token, next)) => ApiResponse::new(
                    200,
                    serde_json::json!({ "token": token, "refreshToken": next, "expiresIn": 3600 })
                        .to_string(),
                ),
                None => ApiResponse::new(401, r#"{"message":"Invalid refresh token"}"#),
            });
        }

        if !request.path.starts_with("/auth/") {
            let authorised = request
                .bearer
                .as_ref()
                .is_some_and(|token| state.accepted.contains(token));
            if !authorised {
                return Ok(ApiResponse::new(401, r#"{"message":"Unauthorized"}"#));
            }
        }

        Ok(match state.routes.get(&request.path) {
            Some((status, body)) => ApiResponse::new(*status, body.clone()),
            None => ApiResponse::new(404, r#"{"message":"Not found"}"#),
        })
    }
}

impl HttpTransport for FakeBackend {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.respond(request);
        // Let concurrent callers interleave the way real network I/O would.
        tokio::task::yield_now().await;
        response
    }
}

pub(crate) fn manager() -> store::UserIdentity {
    store::UserIdentity {
        id: "42".into(),
        work_id: "EMP1".into(),
        email: "a@b.com".into(),
        first_name: "Ada".into(),
        last_name: "Obi".into(),
        role: store::Role::Manager,
        name: "Ada Obi".into(),
    }
}

/// Session store signed in as [`manager`] with the given tokens.
pub(crate) fn signed_in(token: &str, refresh: Option<&str>) -> store::SessionStore {
    let record = serde_json::json!({
        "state": {
            "token": token,
            "refreshToken": refresh,
            "user": manager(),
            "isAuthenticated": true,
        },
        "version": 0,
    });
    store::SessionStore::load(store::MemoryBackend::with_contents(&record.to_string()))
}

/// Client over `backend` with the clock fixed at [`NOW`].
pub(crate) fn client(backend: &FakeBackend, session: &store::SessionStore) -> ApiClient<FakeBackend> {
    ApiClient::with_transport(backend.clone(), session.clone(), REFRESH_PATH.into())
        .with_clock(FixedClock(NOW))
}
