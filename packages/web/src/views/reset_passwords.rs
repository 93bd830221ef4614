//! Admin password resets, by work ID or from the manager list.

use api::{ApiClient, Manager};
use dioxus::prelude::*;
use ui::{
    notify_error, push_notice, use_api, use_notices, Column, DataTable, NoticeLevel, Notices,
};

use super::Field;

async fn reset(api: ApiClient, mut notices: Signal<Notices>, work_id: String) {
    match api.reset_user_password(&work_id).await {
        Ok(()) => push_notice(
            &mut notices,
            NoticeLevel::Success,
            &format!("Password reset for {work_id}"),
        ),
        Err(e) => notify_error(&mut notices, "Could not reset password", &e),
    }
}

#[component]
pub fn ResetPasswords() -> Element {
    let api = use_api();
    let notices = use_notices();
    let mut work_id = use_signal(String::new);

    let loader_api = api.clone();
    let managers = use_resource(move || {
        let api = loader_api.clone();
        let mut notices = notices;
        async move {
            api.list_managers().await.unwrap_or_else(|e| {
                notify_error(&mut notices, "Could not load managers", &e);
                Vec::new()
            })
        }
    });

    let form_api = api.clone();
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let target = work_id().trim().to_string();
        if target.is_empty() {
            return;
        }
        work_id.set(String::new());
        spawn(reset(form_api.clone(), notices, target));
    };

    let row_api = api.clone();
    let columns = use_hook(move || {
        vec![
            Column::new("name", "Name").accessor(Manager::full_name),
            Column::new("workId", "Work ID").accessor(|m: &Manager| m.work_id.clone()),
            Column::new("email", "Email")
                .accessor(|m: &Manager| m.email.clone())
                .hide_on_mobile(),
            Column::new("reset", "").render(move |m: &Manager| {
                let api = row_api.clone();
                let target = m.work_id.clone();
                rsx! {
                    button {
                        class: "btn-secondary",
                        onclick: move |_| {
                            spawn(reset(api.clone(), notices, target.clone()));
                        },
                        "Reset password"
                    }
                }
            }),
        ]
    });

    let rows = managers.read().clone();
    let loading = rows.is_none();

    rsx! {
        section { class: "page",
            h1 { "Reset passwords" }
            form { class: "inline-form", onsubmit,
                Field {
                    label: "Work ID",
                    required: true,
                    value: work_id(),
                    oninput: move |v| work_id.set(v),
                }
                button { class: "btn-primary", r#type: "submit", "Reset" }
            }
            DataTable::<Manager> {
                loading,
                rows: rows.unwrap_or_default(),
                columns,
                empty_message: "No managers found",
            }
        }
    }
}
