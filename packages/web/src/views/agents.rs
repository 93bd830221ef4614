//! Agents of the signed-in manager: list, create, delete.

use api::{Agent, NewAgent};
use dioxus::prelude::*;
use ui::{notify_error, push_notice, use_api, use_notices, Column, DataTable, NoticeLevel};

use super::Field;

fn columns() -> Vec<Column<Agent>> {
    vec![
        Column::new("name", "Name").accessor(|a: &Agent| a.name.clone()),
        Column::new("workId", "Work ID").accessor(|a: &Agent| a.work_id.clone()),
        Column::new("email", "Email")
            .accessor(|a: &Agent| a.email.clone())
            .hide_on_mobile(),
        Column::new("phone", "Phone")
            .accessor(|a: &Agent| a.phone_number.clone())
            .hide_on_mobile(),
        Column::new("nationalId", "National ID")
            .accessor(|a: &Agent| a.national_id.clone())
            .hide_on_mobile(),
        Column::new("leader", "Role").render(|a: &Agent| {
            rsx! {
                if a.leader {
                    span { class: "badge badge-leader", "Team leader" }
                } else {
                    span { class: "badge", "Agent" }
                }
            }
        }),
    ]
}

#[component]
pub fn Agents() -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut selected = use_signal(Vec::<String>::new);
    let mut show_form = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let columns = use_hook(columns);

    let loader_api = api.clone();
    let mut agents = use_resource(move || {
        let api = loader_api.clone();
        let mut notices = notices;
        async move {
            api.list_agents().await.unwrap_or_else(|e| {
                notify_error(&mut notices, "Could not load agents", &e);
                Vec::new()
            })
        }
    });

    let delete_api = api.clone();
    let delete_selected = move |_| {
        let api = delete_api.clone();
        async move {
            busy.set(true);
            let ids = selected();
            let mut deleted = 0;
            for id in &ids {
                match api.delete_agent(id).await {
                    Ok(()) => deleted += 1,
                    Err(e) => {
                        notify_error(&mut notices, "Could not delete agent", &e);
                        break;
                    }
                }
            }
            if deleted > 0 {
                push_notice(&mut notices, NoticeLevel::Success, &format!("Deleted {deleted} agent(s)"));
            }
            busy.set(false);
            agents.restart();
        }
    };

    let rows = agents.read().clone();
    let loading = rows.is_none() || busy();
    let selected_count = selected.read().len();

    rsx! {
        section { class: "page",
            header { class: "page-header",
                h1 { "Agents" }
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
                        if show_form() { "Cancel" } else { "Add agent" }
                    }
                }
            }

            if show_form() {
                NewAgentForm {
                    on_created: move |agent: Agent| {
                        push_notice(&mut notices, NoticeLevel::Success, &format!("Added {}", agent.name));
                        show_form.set(false);
                        agents.restart();
                    },
                }
            }

            DataTable::<Agent> {
                rows: rows.unwrap_or_default(),
                columns,
                selectable: true,
                loading,
                empty_message: "No agents yet",
                on_selection_change: move |keys| selected.set(keys),
            }
        }
    }
}

#[component]
fn NewAgentForm(on_created: EventHandler<Agent>) -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let mut form = use_signal(NewAgent::default);
    let mut error = use_signal(|| Option::<String>::None);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            error.set(None);
            match api.create_agent(&form()).await {
                Ok(agent) => {
                    form.set(NewAgent::default());
                    on_created.call(agent);
                }
                Err(e) if e.is_auth_failure() => notify_error(&mut notices, "Could not add agent", &e),
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
            button { class: "btn-primary", r#type: "submit", "Create agent" }
        }
    }
}
