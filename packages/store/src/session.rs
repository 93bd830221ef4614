//! # Session store: the single source of truth for who is signed in
//!
//! [`SessionStore`] owns the one [`Session`] of a client process. It is created
//! once at start-up by [`SessionStore::load`], which rehydrates the persisted
//! session from a [`SessionBackend`], and is then cloned into every consumer
//! (API client, route guard, pages). Clones share the same state.
//!
//! ## Mutations
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`set_auth`](SessionStore::set_auth) | Replace every field after a successful login. |
//! | [`update_tokens`](SessionStore::update_tokens) | Replace the access/refresh pair, keep the user. |
//! | [`update_tokens_if_current`](SessionStore::update_tokens_if_current) | Same, unless a login or logout happened since `epoch`. |
//! | [`logout`](SessionStore::logout) | Clear every field. |
//!
//! Each mutation swaps the whole value under one lock, so readers see either the
//! old or the new session and never a mix, then writes the persisted subset to
//! the backend and wakes every [`SessionWatcher`].
//!
//! ## Persisted format
//!
//! ```json
//! {"state": {"token": "...", "refreshToken": "...", "user": {...},
//!            "isAuthenticated": true, "expiresIn": 3600}, "version": 0}
//! ```
//!
//! Anything that does not parse, or parses into a session that breaks the
//! authentication invariant, is treated as "signed out".

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::models::{Role, UserIdentity};

/// Persisted format version.
const PERSIST_VERSION: u32 = 0;

/// The authenticated context of the client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Short-lived bearer credential.
    #[serde(default)]
    pub token: Option<String>,
    /// Long-lived credential used only to mint new access tokens.
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserIdentity>,
    /// True iff `token` and `user` are both present.
    #[serde(default)]
    pub is_authenticated: bool,
    /// Informational lifetime in seconds as reported at login.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl Session {
    pub fn has_role(&self, role: &Role) -> bool {
        self.user.as_ref().is_some_and(|u| &u.role == role)
    }

    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|u| &u.role)
    }

    /// Recompute `is_authenticated` from the fields it depends on.
    fn normalized(mut self) -> Self {
        self.is_authenticated = self.token.is_some() && self.user.is_some();
        self
    }
}

#[derive(Serialize, Deserialize)]
struct PersistedSession {
    state: Session,
    #[serde(default)]
    version: u32,
}

/// Durable storage for the serialized session.
///
/// Implementations never fail loudly: a backend that cannot read returns
/// `None`, and one that cannot write logs and carries on.
pub trait SessionBackend: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

struct SessionState {
    session: Session,
    /// Bumped by `set_auth` and `logout`, not by token refreshes.
    epoch: u64,
}

/// Shared handle to the process' session.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<watch::Sender<SessionState>>,
    backend: Arc<dyn SessionBackend>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SessionStore")
            .field("is_authenticated", &state.session.is_authenticated)
            .field("epoch", &state.epoch)
            .finish()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl SessionStore {
    /// Rehydrate the session from `backend`, falling back to an empty session.
    pub fn load(backend: impl SessionBackend + 'static) -> Self {
        let session = backend
            .load()
            .map(|raw| parse_persisted(&raw))
            .unwrap_or_default();
        let (state, _) = watch::channel(SessionState { session, epoch: 0 });
        Self {
            state: Arc::new(state),
            backend: Arc::new(backend),
        }
    }

    /// Current session by value.
    pub fn snapshot(&self) -> Session {
        self.state.borrow().session.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.state.borrow().session.token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.state.borrow().session.refresh_token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().session.is_authenticated
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.state.borrow().session.has_role(role)
    }

    /// Generation of the session identity; changes on login and logout.
    pub fn epoch(&self) -> u64 {
        self.state.borrow().epoch
    }

    /// Watcher that is woken after every mutation.
    pub fn subscribe(&self) -> SessionWatcher {
        SessionWatcher {
            rx: self.state.subscribe(),
        }
    }

    /// Replace every field after a successful login.
    pub fn set_auth(
        &self,
        token: String,
        refresh_token: String,
        user: UserIdentity,
        expires_in: Option<u64>,
    ) {
        tracing::debug!(work_id = %user.work_id, role = %user.role, "session established");
        self.mutate(|state| {
            state.session = Session {
                token: Some(token),
                refresh_token: Some(refresh_token),
                user: Some(user),
                is_authenticated: true,
                expires_in,
            };
            state.epoch += 1;
            true
        });
    }

    /// Replace the token pair, keeping the user.
    pub fn update_tokens(&self, token: String, refresh_token: String) {
        self.mutate(|state| {
            let session = std::mem::take(&mut state.session);
            state.session = Session {
                token: Some(token),
                refresh_token: Some(refresh_token),
                ..session
            }
            .normalized();
            true
        });
    }

    /// Replace the token pair only if the session is still the one seen at `epoch`.
    ///
    /// Returns `false` (and changes nothing) when a login or logout happened in between.
    pub fn update_tokens_if_current(&self, epoch: u64, token: String, refresh_token: String) -> bool {
        let applied = self.mutate(|state| {
            if state.epoch != epoch {
                return false;
            }
            let session = std::mem::take(&mut state.session);
            state.session = Session {
                token: Some(token),
                refresh_token: Some(refresh_token),
                ..session
            }
            .normalized();
            true
        });
        if !applied {
            tracing::debug!(epoch, "discarding refreshed tokens for a replaced session");
        }
        applied
    }

    /// Clear every field.
    pub fn logout(&self) {
        tracing::debug!("session cleared");
        self.mutate(|state| {
            state.session = Session::default();
            state.epoch += 1;
            true
        });
    }

    /// Apply `f` under the lock; persist and notify only if it reports a change.
    ///
    /// The write to the backend happens while the lock is held, so storage
    /// receives mutations in the same order as the in-memory state.
    fn mutate(&self, f: impl FnOnce(&mut SessionState) -> bool) -> bool {
        self.state.send_if_modified(|state| {
            let modified = f(state);
            if modified {
                self.persist(&state.session);
            }
            modified
        })
    }

    fn persist(&self, session: &Session) {
        if *session == Session::default() {
            self.backend.clear();
            return;
        }
        let record = PersistedSession {
            state: session.clone(),
            version: PERSIST_VERSION,
        };
        match serde_json::to_string(&record) {
            Ok(raw) => self.backend.save(&raw),
            Err(e) => tracing::warn!("failed to serialize session: {e}"),
        }
    }
}

fn parse_persisted(raw: &str) -> Session {
    match serde_json::from_str::<PersistedSession>(raw) {
        Ok(record) => {
            let session = record.state;
            let normalized = session.clone().normalized();
            if normalized.is_authenticated != session.is_authenticated {
                tracing::warn!("persisted session flag disagrees with its fields; recomputed");
            }
            normalized
        }
        Err(e) => {
            tracing::warn!("ignoring malformed persisted session: {e}");
            Session::default()
        }
    }
}

/// Change notifications for a [`SessionStore`].
pub struct SessionWatcher {
    rx: watch::Receiver<SessionState>,
}

impl SessionWatcher {
    /// Wait for the next mutation. Returns `false` once the store is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// The session as of the latest mutation, marking it seen.
    pub fn current(&mut self) -> Session {
        self.rx.borrow_and_update().session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;

    fn manager() -> UserIdentity {
        UserIdentity {
            id: "42".into(),
            work_id: "EMP1".into(),
            email: "a@b.com".into(),
            first_name: "Ada".into(),
            last_name: "Obi".into(),
            role: Role::Manager,
            name: "Ada Obi".into(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = SessionStore::load(MemoryBackend::new());
        assert_eq!(store.snapshot(), Session::default());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_auth_then_logout_clears_everything() {
        let store = SessionStore::load(MemoryBackend::new());
        store.set_auth("T1".into(), "R1".into(), manager(), Some(3600));

        let session = store.snapshot();
        assert_eq!(session.token.as_deref(), Some("T1"));
        assert_eq!(session.refresh_token.as_deref(), Some("R1"));
        assert!(session.is_authenticated);
        assert!(store.has_role(&Role::Manager));
        assert!(!store.has_role(&Role::Admin));

        store.logout();
        let session = store.snapshot();
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(session.refresh_token.is_none());
        assert!(session.expires_in.is_none());
    }

    #[test]
    fn test_update_tokens_keeps_user() {
        let store = SessionStore::load(MemoryBackend::new());
        store.set_auth("T1".into(), "R1".into(), manager(), Some(3600));
        store.update_tokens("T2".into(), "R2".into());

        let session = store.snapshot();
        assert_eq!(session.token.as_deref(), Some("T2"));
        assert_eq!(session.refresh_token.as_deref(), Some("R2"));
        assert_eq!(session.user, Some(manager()));
        assert_eq!(session.expires_in, Some(3600));
        assert!(session.is_authenticated);
    }

    #[test]
    fn test_update_tokens_without_user_stays_unauthenticated() {
        let store = SessionStore::load(MemoryBackend::new());
        store.update_tokens("T2".into(), "R2".into());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_stale_epoch_refresh_is_discarded() {
        let store = SessionStore::load(MemoryBackend::new());
        store.set_auth("T1".into(), "R1".into(), manager(), None);
        let epoch = store.epoch();

        store.logout();
        assert!(!store.update_tokens_if_current(epoch, "T2".into(), "R2".into()));
        assert_eq!(store.snapshot(), Session::default());

        store.set_auth("T3".into(), "R3".into(), manager(), None);
        let epoch = store.epoch();
        assert!(store.update_tokens_if_current(epoch, "T4".into(), "R4".into()));
        assert_eq!(store.access_token().as_deref(), Some("T4"));
        assert_eq!(store.epoch(), epoch);
    }

    #[test]
    fn test_session_survives_restart() {
        let backend = MemoryBackend::new();
        let store = SessionStore::load(backend.clone());
        store.set_auth("T1".into(), "R1".into(), manager(), Some(60));

        let raw = backend.load().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["state"]["token"], "T1");
        assert_eq!(value["state"]["refreshToken"], "R1");
        assert_eq!(value["state"]["isAuthenticated"], true);
        assert_eq!(value["version"], 0);

        let reopened = SessionStore::load(backend.clone());
        assert_eq!(reopened.snapshot(), store.snapshot());

        reopened.logout();
        assert!(backend.load().is_none());
    }

    #[test]
    fn test_malformed_persisted_data_is_empty_session() {
        for raw in ["", "{", "null", r#"{"state": 7}"#, r#"{"token": "T1"}"#] {
            let backend = MemoryBackend::with_contents(raw);
            let store = SessionStore::load(backend);
            assert_eq!(store.snapshot(), Session::default(), "input {raw:?}");
        }
    }

    #[test]
    fn test_inconsistent_flag_is_recomputed() {
        let backend = MemoryBackend::with_contents(
            r#"{"state": {"token": "T1", "refreshToken": "R1", "user": null, "isAuthenticated": true}}"#,
        );
        let store = SessionStore::load(backend);
        assert!(!store.is_authenticated());
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));
    }

    #[test]
    fn test_storage_ends_in_final_state_under_concurrent_writes() {
        let backend = MemoryBackend::new();
        let store = SessionStore::load(backend.clone());

        std::thread::scope(|scope| {
            let signer = store.clone();
            scope.spawn(move || {
                for i in 0..200 {
                    signer.set_auth(format!("T{i}"), format!("R{i}"), manager(), None);
                }
            });
            let leaver = store.clone();
            scope.spawn(move || {
                for _ in 0..200 {
                    leaver.logout();
                }
            });
        });

        let reopened = SessionStore::load(backend);
        assert_eq!(reopened.snapshot(), store.snapshot());
    }

    #[tokio::test]
    async fn test_subscribers_see_every_mutation() {
        let store = SessionStore::load(MemoryBackend::new());
        let mut rx = store.subscribe();

        store.set_auth("T1".into(), "R1".into(), manager(), None);
        assert!(rx.changed().await);
        assert!(rx.current().is_authenticated);

        store.logout();
        assert!(rx.changed().await);
        assert!(!rx.current().is_authenticated);
    }
}
