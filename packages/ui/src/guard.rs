//! # Route access policy
//!
//! Pure decision logic behind [`AuthGuard`](crate::AuthGuard). Given the target
//! path, the current [`Session`] and a [`RoutePolicy`], [`evaluate`] answers
//! whether the page may render or where the user should be sent instead.
//!
//! Rules, first match wins:
//!
//! 1. Public paths always render. An authenticated user opening the
//!    auth-entry path (login) is sent to their landing page instead, if their
//!    role has one.
//! 2. No session: redirect to login.
//! 3. The longest restricted prefix covering the path excludes the user's
//!    role: redirect to the role's landing page (login if it has none).
//! 4. Otherwise allowed.

use store::{Role, Session};

/// Outcome of one navigation check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Not evaluated yet; nothing protected may render.
    Checking,
    Allowed,
    /// No session; go to the contained path (login).
    RedirectedUnauthenticated(String),
    /// Signed in but not permitted here; go to the contained landing path.
    RedirectedForbidden(String),
}

impl GuardState {
    /// Where to navigate, if anywhere.
    pub fn redirect(&self) -> Option<&str> {
        match self {
            GuardState::RedirectedUnauthenticated(to) | GuardState::RedirectedForbidden(to) => {
                Some(to)
            }
            GuardState::Checking | GuardState::Allowed => None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardState::Allowed)
    }
}

/// Paths restricted to a set of roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restriction {
    pub prefix: String,
    pub roles: Vec<Role>,
}

/// Route-to-role mapping plus the public and landing paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePolicy {
    pub login_path: String,
    pub public_paths: Vec<String>,
    pub restrictions: Vec<Restriction>,
    pub landing_pages: Vec<(Role, String)>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        let manager_only = [
            "/home",
            "/agents",
            "/reports",
            "/attendance",
            "/performance",
            "/settings",
        ];
        let mut restrictions = vec![Restriction {
            prefix: "/admin".into(),
            roles: vec![Role::Admin],
        }];
        restrictions.extend(manager_only.iter().map(|prefix| Restriction {
            prefix: (*prefix).into(),
            roles: vec![Role::Manager],
        }));

        Self {
            login_path: "/login".into(),
            public_paths: vec!["/login".into(), "/forgot-password".into()],
            restrictions,
            landing_pages: vec![
                (Role::Manager, "/home".into()),
                (Role::Admin, "/admin/managers".into()),
            ],
        }
    }
}

impl RoutePolicy {
    /// Landing page of `role`, if it has one.
    pub fn landing(&self, role: &Role) -> Option<&str> {
        self.landing_pages
            .iter()
            .find(|(r, _)| r == role)
            .map(|(_, path)| path.as_str())
    }

    /// Landing page of `role`, or login.
    pub fn landing_or_login(&self, role: Option<&Role>) -> &str {
        role.and_then(|role| self.landing(role))
            .unwrap_or(self.login_path.as_str())
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths
            .iter()
            .any(|public| matches_prefix(public, path))
    }

    /// The most specific restriction covering `path`.
    pub fn restriction_for(&self, path: &str) -> Option<&Restriction> {
        self.restrictions
            .iter()
            .filter(|r| matches_prefix(&r.prefix, path))
            .max_by_key(|r| segments(&r.prefix).count())
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|s| !s.is_empty())
}

/// Segment-wise prefix match: `/admin` covers `/admin/x` but not `/administrator`.
fn matches_prefix(prefix: &str, path: &str) -> bool {
    let mut path = segments(path);
    segments(prefix).all(|want| path.next() == Some(want))
}

/// Decide what to do with a navigation to `path`.
pub fn evaluate(path: &str, session: &Session, policy: &RoutePolicy) -> GuardState {
    let role = session.role().filter(|_| session.is_authenticated);

    if policy.is_public(path) {
        if let Some(landing) = role.and_then(|role| policy.landing(role)) {
            if matches_prefix(&policy.login_path, path) {
                return GuardState::RedirectedForbidden(landing.to_string());
            }
        }
        return GuardState::Allowed;
    }

    let Some(role) = role else {
        return GuardState::RedirectedUnauthenticated(policy.login_path.clone());
    };

    if let Some(restriction) = policy.restriction_for(path) {
        if !restriction.roles.contains(role) {
            return GuardState::RedirectedForbidden(policy.landing_or_login(Some(role)).to_string());
        }
    }

    GuardState::Allowed
}
