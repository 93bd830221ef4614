use api::{AgentReport, ReportPeriod};
use dioxus::prelude::*;
use ui::{notify_error, use_api, use_notices, Column, DataTable};

fn columns() -> Vec<Column<AgentReport>> {
    vec![
        Column::new("workId", "Work ID").accessor(|r: &AgentReport| r.work_id.clone()),
        Column::new("agent", "Agent name").accessor(|r: &AgentReport| r.agent_name.clone()),
        Column::new("sector", "Sector")
            .accessor(AgentReport::sectors_label)
            .hide_on_mobile(),
        Column::new("clients", "Total clients")
            .accessor(|r: &AgentReport| r.total_clients_engaged.to_string()),
    ]
}

/// Clients engaged per agent, switchable between daily, weekly and monthly.
#[component]
pub fn Performance() -> Element {
    let api = use_api();
    let notices = use_notices();
    let mut period = use_signal(ReportPeriod::default);
    let mut query = use_signal(String::new);
    let columns = use_hook(columns);

    let reports = use_resource(move || {
        let api = api.clone();
        let mut notices = notices;
        let period = period();
        async move {
            api.list_reports(period).await.unwrap_or_else(|e| {
                notify_error(&mut notices, "Could not load performance", &e);
                Vec::new()
            })
        }
    });

    let loading = reports.read().is_none();
    let mut rows: Vec<AgentReport> = reports
        .read()
        .iter()
        .flatten()
        .filter(|r| r.matches(&query.read()))
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.total_clients_engaged.cmp(&a.total_clients_engaged));

    let current = period();
    let tabs: Vec<(ReportPeriod, &str, &str)> = ReportPeriod::ALL
        .into_iter()
        .map(|p| (p, p.label(), if p == current { "tab active" } else { "tab" }))
        .collect();

    rsx! {
        section { class: "page",
            header { class: "page-header",
                h1 { "Performance" }
                div { class: "tabs", role: "tablist",
                    for (p, label, class) in tabs {
                        button {
                            key: "{label}",
                            class,
                            onclick: move |_| period.set(p),
                            "{label}"
                        }
                    }
                }
            }
            input {
                class: "table-filter",
                r#type: "search",
                placeholder: "Filter agents",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            DataTable::<AgentReport> {
                rows,
                columns,
                loading,
                empty_message: "No activity for this period",
            }
        }
    }
}
