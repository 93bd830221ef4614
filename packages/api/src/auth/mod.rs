//! Sign-in, sign-out and password recovery.
//!
//! Login and forgot-password are public requests: they never carry a bearer
//! token and never trigger a refresh, so a stale session cannot interfere with
//! signing in again.

use serde::{Deserialize, Serialize};
use store::UserIdentity;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{ApiRequest, HttpTransport};
use crate::validation;

/// Login form. The password is optional; accounts without one sign in with
/// email and work ID alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub email: String,
    pub work_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, work_id: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            work_id: work_id.into().trim().to_string(),
            password: None,
        }
    }

    /// Attach a password; an empty one is treated as absent.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        let password = password.into();
        self.password = (!password.is_empty()).then_some(password);
        self
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        validation::employee(&self.email, &self.work_id)?;
        match &self.password {
            Some(password) => validation::strong_password(password),
            None => Ok(()),
        }
    }
}

/// Flat body of a successful `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(flatten)]
    pub user: UserIdentity,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ForgotPassword<'a> {
    email: &'a str,
    work_id: &'a str,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Authenticate and replace the session with the returned tokens and user.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<UserIdentity, ApiError> {
        credentials.validate()?;
        let request = ApiRequest::post("/auth/login").json(credentials)?;
        let response = self
            .send_public(request)
            .await?
            .error_for_status_or("Login failed")?;
        let body: LoginResponse = response.json()?;
        tracing::info!(work_id = %body.user.work_id, role = %body.user.role, "signed in");
        self.session().set_auth(
            body.token,
            body.refresh_token,
            body.user.clone(),
            body.expires_in,
        );
        Ok(body.user)
    }

    /// Ask the backend to email a password reset link.
    pub async fn forgot_password(&self, email: &str, work_id: &str) -> Result<(), ApiError> {
        validation::employee(email, work_id)?;
        let request = ApiRequest::post("/auth/forgot-password").json(&ForgotPassword {
            email: email.trim(),
            work_id: work_id.trim(),
        })?;
        self.send_public(request)
            .await?
            .error_for_status_or("Could not send the reset link")
            .map(|_| ())
    }

    /// Sign out locally. The backend keeps no session to end.
    pub fn logout(&self) {
        tracing::info!("signed out");
        self.session().logout();
    }
}

#[cfg(test)]
mod tests {
    use store::{MemoryBackend, Role, SessionStore};

    use super::*;
    use crate::testing::*;

    const LOGIN_OK: &str = r#"{
        "token": "T1", "refreshToken": "R1", "expiresIn": 3600,
        "id": 42, "workId": "EMP1", "email": "a@b.com",
        "firstName": "Ada", "lastName": "Obi", "role": "manager", "name": "Ada Obi"
    }"#;

    #[tokio::test]
    async fn test_login_populates_session() {
        let backend = FakeBackend::new();
        backend.route("/auth/login", 200, LOGIN_OK);
        let session = SessionStore::load(MemoryBackend::new());

        let user = client(&backend, &session)
            .login(&LoginCredentials::new("a@b.com", "EMP1"))
            .await
            .unwrap();

        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.id, "42");
        let snapshot = session.snapshot();
        assert_eq!(snapshot.token.as_deref(), Some("T1"));
        assert_eq!(snapshot.refresh_token.as_deref(), Some("R1"));
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.expires_in, Some(3600));

        let sent = &backend.calls_to("/auth/login")[0];
        let body = sent.body.as_ref().unwrap();
        assert_eq!(body["workId"], "EMP1");
        assert!(body.get("password").is_none());
        assert_eq!(sent.bearer, None);
    }

    #[tokio::test]
    async fn test_login_ignores_stale_session() {
        let backend = FakeBackend::new();
        backend.route("/auth/login", 200, LOGIN_OK);
        let session = signed_in(&expired_token("old"), None);

        client(&backend, &session)
            .login(&LoginCredentials::new("a@b.com", "EMP1"))
            .await
            .unwrap();

        assert!(backend.calls_to(REFRESH_PATH).is_empty());
        assert_eq!(session.access_token().as_deref(), Some("T1"));
    }

    #[tokio::test]
    async fn test_rejected_login_reports_backend_message() {
        let backend = FakeBackend::new();
        backend.route("/auth/login", 401, r#"{"message":"Invalid work ID"}"#);
        let session = SessionStore::load(MemoryBackend::new());

        let err = client(&backend, &session)
            .login(&LoginCredentials::new("a@b.com", "EMP9"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid work ID");
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejected_login_without_message() {
        let backend = FakeBackend::new();
        backend.route("/auth/login", 500, "");
        let session = SessionStore::load(MemoryBackend::new());

        let err = client(&backend, &session)
            .login(&LoginCredentials::new("a@b.com", "EMP1"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Login failed");
    }

    #[tokio::test]
    async fn test_weak_password_is_not_sent() {
        let backend = FakeBackend::new();
        let session = SessionStore::load(MemoryBackend::new());
        let credentials = LoginCredentials::new("a@b.com", "EMP1").with_password("password");

        let err = client(&backend, &session)
            .login(&credentials)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(backend.calls_to("/auth/login").is_empty());
    }

    #[tokio::test]
    async fn test_forgot_password() {
        let backend = FakeBackend::new();
        backend.route("/auth/forgot-password", 200, "");
        let session = SessionStore::load(MemoryBackend::new());

        client(&backend, &session)
            .forgot_password(" a@b.com ", "EMP1")
            .await
            .unwrap();

        let body = backend.calls_to("/auth/forgot-password")[0].body.clone().unwrap();
        assert_eq!(body, serde_json::json!({ "email": "a@b.com", "workId": "EMP1" }));
    }

    #[test]
    fn test_empty_password_is_absent() {
        let credentials = LoginCredentials::new("a@b.com", "EMP1").with_password("");
        assert_eq!(credentials.password, None);
    }
}
