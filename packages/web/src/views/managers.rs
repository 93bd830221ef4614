//! Admin view of managers: list, create, delete.

use api::{Manager, NewManager};
use dioxus::prelude::*;
use ui::{notify_error, push_notice, use_api, use_notices, Column, DataTable, NoticeLevel};

use super::Field;

fn columns() -> Vec<Column<Manager>> {
    vec![
        Column::new("name", "Name").accessor(Manager::full_name),
        Column::new("workId", "Work ID").accessor(|m: &Manager| m.work_id.clone()),
        Column::new("email", "Email")
            .accessor(|m: &Manager| m.email.clone())
            .hide_on_mobile(),
        Column::new("phone", "Phone")
            .accessor(|m: &Manager| m.phone_number.clone())
            .hide_on_mobile(),
        Column::new("nationalId", "National ID")
            .accessor(|m: &Manager| m.national_id.clone())
            .hide_on_mobile(),
    ]
}

#[component]
pub fn Managers() -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut selected = use_signal(Vec::<String>::new);
    let mut show_form = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let columns = use_hook(columns);

    let loader_api = api.clone();
    let mut managers = use_resource(move || {
        let api = loader_api.clone();
        let mut notices = notices;
        async move {
            api.list_managers().await.unwrap_or_else(|e| {
                notify_error(&mut notices, "Could not load managers", &e);
                Vec::new()
            })
        }
    });

    let delete_selected = move |_| {
        let api = api.clone();
        async move {
            busy.set(true);
            for id in selected() {
                if let Err(e) = api.delete_manager(&id).await {
                    notify_error(&mut notices, "Could not delete manager", &e);
                    break;
                }
            }
            busy.set(false);
            managers.restart();
        }
    };

    let rows = managers.read().clone();
    let loading = rows.is_none() || busy();
    let selected_count = selected.read().len();

    rsx! {
        section { class: "page",
            header { class: "page-header",
                h1 { "Managers" }
                div { class: "page-actions",
                    button {
                        class: "btn-danger",
                        disabled: selected_count == 0 || busy(),
                        onclick: delete_selected,
                        "Delete selected ({selected_count})"
                    }
                    button {
                        class: "btn-primary",
                        onclick: move |_| show_form.set(!show_form()),
                        if show_form() { "Cancel" } else { "Add manager" }
                    }
                }
            }

            if show_form() {
                NewManagerForm {
                    on_created: move |manager: Manager| {
                        push_notice(
                            &mut notices,
                            NoticeLevel::Success,
                            &format!("Added {}", manager.full_name()),
                        );
                        show_form.set(false);
                        managers.restart();
                    },
                }
            }

            DataTable::<Manager> {
                rows: rows.unwrap_or_default(),
                columns,
                selectable: true,
                loading,
                empty_message: "No managers yet",
                on_selection_change: move |keys| selected.set(keys),
            }
        }
    }
}

#[component]
fn NewManagerForm(on_created: EventHandler<Manager>) -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut form = use_signal(NewManager::default);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            error.set(None);
            match api.create_manager(&form()).await {
                Ok(manager) => {
                    form.set(NewManager::default());
                    on_created.call(manager);
                }
                Err(e) if e.is_auth_failure() => {
                    notify_error(&mut notices, "Could not add manager", &e)
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    };

    rsx! {
        form { class: "entity-form", onsubmit,
            Field { label: "First name", required: true, value: form().first_name, oninput: move |v| form.write().first_name = v }
            Field { label: "Last name", required: true, value: form().last_name, oninput: move |v| form.write().last_name = v }
            Field { label: "Email", kind: "email", required: true, value: form().email, oninput: move |v| form.write().email = v }
            Field { label: "Work ID", required: true, value: form().work_id, oninput: move |v| form.write().work_id = v }
            Field { label: "National ID", required: true, value: form().national_id, oninput: move |v| form.write().national_id = v }
            Field { label: "Phone number", kind: "tel", required: true, value: form().phone_number, oninput: move |v| form.write().phone_number = v }
            if let Some(message) = error() {
                p { class: "form-error", role: "alert", "{message}" }
            }
            button { class: "btn-primary", r#type: "submit", "Create manager" }
        }
    }
}
