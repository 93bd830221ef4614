//! Session context and route protection for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::{DashboardConfig, Session, SessionStore};

use crate::guard::{evaluate, RoutePolicy};
use crate::session::{make_client, make_session_store};

/// The current session, kept in sync with the [`SessionStore`].
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_route_policy() -> RoutePolicy {
    use_context::<RoutePolicy>()
}

/// Creates the session store and API client once and provides them, with the
/// configuration and the route policy, to every descendant.
#[component]
pub fn SessionProvider(config: DashboardConfig, children: Element) -> Element {
    let store = use_hook(|| make_session_store(&config));
    let client = use_hook(|| make_client(&config, store.clone()).map_err(|e| e.to_string()));
    let mut session = use_signal(|| store.snapshot());

    use_context_provider(|| config.clone());
    use_context_provider(|| store.clone());
    use_context_provider(|| session);
    use_context_provider(RoutePolicy::default);

    // Mirror store mutations, including logouts forced by the API client.
    let watched = store.clone();
    use_future(move || {
        let store = watched.clone();
        async move {
            let mut watcher = store.subscribe();
            session.set(watcher.current());
            while watcher.changed().await {
                session.set(watcher.current());
            }
        }
    });

    // `client` is fixed for the provider's lifetime, so the hook order is stable.
    match client {
        Ok(client) => {
            use_context_provider(|| client);
            rsx! {
                {children}
            }
        }
        Err(e) => {
            tracing::error!("could not create the API client: {e}");
            rsx! {
                div { class: "fatal-error",
                    h1 { "The dashboard could not start" }
                    p { "{e}" }
                }
            }
        }
    }
}

/// Renders `children` only while the current session may see `path`.
///
/// The decision is recomputed on every render, so a session change hides
/// protected content in the same pass; a failed check also replaces the
/// current history entry with the redirect target.
#[component]
pub fn AuthGuard(path: String, children: Element) -> Element {
    let session = use_session();
    let policy = use_route_policy();
    let nav = navigator();

    let decision = evaluate(&path, &session.read(), &policy);

    use_effect(use_reactive!(|path| {
        let decision = evaluate(&path, &session.read(), &policy);
        if let Some(to) = decision.redirect() {
            tracing::debug!(from = %path, to, "redirecting");
            nav.replace(to.to_string());
        }
    }));

    if decision.is_allowed() {
        rsx! {
            {children}
        }
    } else {
        rsx! {
            div { class: "guard-checking", aria_busy: "true" }
        }
    }
}

/// Button to sign out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let api = use_api();
    let policy = use_route_policy();
    let nav = navigator();

    let onclick = move |_| {
        api.logout();
        nav.replace(policy.login_path.clone());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// The store behind [`use_session`], for code that mutates it directly.
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
}
