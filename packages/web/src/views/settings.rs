//! Profile and password settings of the signed-in user.

use api::Profile;
use dioxus::prelude::*;
use ui::{notify_error, push_notice, use_api, use_notices, NoticeLevel};

use super::Field;

#[component]
pub fn Settings() -> Element {
    let api = use_api();
    let mut notices = use_notices();

    let loader_api = api.clone();
    let mut profile = use_resource(move || {
        let api = loader_api.clone();
        let mut notices = notices;
        async move {
            match api.profile().await {
                Ok(profile) => Some(profile),
                Err(e) => {
                    notify_error(&mut notices, "Could not load your profile", &e);
                    None
                }
            }
        }
    });

    let remove_image = move |_| {
        let api = api.clone();
        async move {
            match api.remove_profile_image().await {
                Ok(()) => {
                    push_notice(&mut notices, NoticeLevel::Success, "Profile image removed");
                    profile.restart();
                }
                Err(e) => notify_error(&mut notices, "Could not remove the image", &e),
            }
        }
    };

    let details = match profile.read().clone() {
        None => rsx! { p { class: "data-loading", "Loading…" } },
        Some(None) => rsx! {},
        Some(Some(profile)) => rsx! {
            ProfileCard { profile: profile.clone() }
            if profile.profile_image_url.is_some() {
                button { class: "btn-secondary", onclick: remove_image, "Remove profile image" }
            }
        },
    };

    rsx! {
        section { class: "page",
            h1 { "Settings" }
            {details}
            PasswordForm {}
        }
    }
}

#[component]
fn ProfileCard(profile: Profile) -> Element {
    let rows = [
        ("Name", profile.display_name()),
        ("Email", profile.email.clone()),
        ("Work ID", profile.work_id.clone()),
        ("Phone", profile.phone_number.clone()),
        ("National ID", profile.national_id.clone()),
        ("Region", profile.region.clone().unwrap_or_else(|| "-".into())),
        ("Role", profile.role.name.clone()),
    ];

    rsx! {
        div { class: "profile-card",
            if let Some(url) = profile.profile_image_url.as_ref() {
                img { class: "profile-image", src: "{url}", alt: "Profile image" }
            }
            dl {
                for (label, value) in rows {
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }
    }
}

#[component]
fn PasswordForm() -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            error.set(None);
            match api.set_password(&password(), &confirm()).await {
                Ok(()) => {
                    password.set(String::new());
                    confirm.set(String::new());
                    push_notice(&mut notices, NoticeLevel::Success, "Password updated");
                }
                Err(e) if e.is_auth_failure() => {
                    notify_error(&mut notices, "Could not update the password", &e)
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    };

    rsx! {
        form { class: "entity-form", onsubmit,
            h2 { "Change password" }
            Field {
                label: "New password",
                kind: "password",
                required: true,
                value: password(),
                oninput: move |v| password.set(v),
            }
            Field {
                label: "Confirm password",
                kind: "password",
                required: true,
                value: confirm(),
                oninput: move |v| confirm.set(v),
            }
            if let Some(message) = error() {
                p { class: "form-error", role: "alert", "{message}" }
            }
            button { class: "btn-primary", r#type: "submit", "Update password" }
        }
    }
}
