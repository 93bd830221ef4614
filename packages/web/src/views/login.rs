//! Login page.

use api::LoginCredentials;
use dioxus::prelude::*;
use ui::{use_api, use_route_policy};

use super::Field;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let policy = use_route_policy();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut work_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let policy = policy.clone();
        async move {
            submitting.set(true);
            error.set(None);
            let credentials = LoginCredentials::new(email(), work_id()).with_password(password());
            match api.login(&credentials).await {
                Ok(user) => match policy.landing(&user.role) {
                    Some(landing) => {
                        nav.replace(landing.to_string());
                    }
                    None => {
                        tracing::warn!(role = %user.role, "no dashboard for role");
                        api.logout();
                        error.set(Some("This account has no access to the dashboard".into()));
                    }
                },
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        }
    };

    rsx! {
        div { class: "auth-page",
            form { class: "auth-card", onsubmit,
                h1 { "Sign in" }
                p { class: "auth-hint", "Use your work email and employee ID." }

                Field {
                    label: "Email",
                    kind: "email",
                    required: true,
                    value: email(),
                    oninput: move |v| email.set(v),
                }
                Field {
                    label: "Work ID",
                    required: true,
                    value: work_id(),
                    oninput: move |v| work_id.set(v),
                }
                Field {
                    label: "Password (if set)",
                    kind: "password",
                    value: password(),
                    oninput: move |v| password.set(v),
                }

                if let Some(message) = error() {
                    p { class: "form-error", role: "alert", "{message}" }
                }

                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
                Link { class: "auth-link", to: Route::ForgotPassword {}, "Forgot password?" }
            }
        }
    }
}
