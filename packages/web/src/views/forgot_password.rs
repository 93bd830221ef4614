use dioxus::prelude::*;
use ui::{push_notice, use_api, use_notices, NoticeLevel};

use super::Field;
use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut email = use_signal(String::new);
    let mut work_id = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            error.set(None);
            match api.forgot_password(&email(), &work_id()).await {
                Ok(()) => {
                    sent.set(true);
                    push_notice(&mut notices, NoticeLevel::Success, "Reset link sent");
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    };

    rsx! {
        div { class: "auth-page",
            form { class: "auth-card", onsubmit,
                h1 { "Reset your password" }
                if sent() {
                    p { "Check your inbox for a link to choose a new password." }
                } else {
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
                    if let Some(message) = error() {
                        p { class: "form-error", role: "alert", "{message}" }
                    }
                    button { class: "btn-primary", r#type: "submit", "Send reset link" }
                }
                Link { class: "auth-link", to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
