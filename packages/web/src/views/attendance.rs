use api::{AgentReport, ReportPeriod};
use dioxus::prelude::*;
use ui::{notify_error, use_api, use_notices, Column, DataTable};

fn status_cell(report: &AgentReport) -> Element {
    let status = report.latest_status().unwrap_or("Not Started").to_string();
    let class = if status == "Started" {
        "status-dot started"
    } else {
        "status-dot"
    };
    rsx! {
        span { class: "status",
            span { class }
            "{status}"
        }
    }
}

fn columns() -> Vec<Column<AgentReport>> {
    vec![
        Column::new("workId", "Work ID").accessor(|r: &AgentReport| r.work_id.clone()),
        Column::new("agent", "Agent name").accessor(|r: &AgentReport| r.agent_name.clone()),
        Column::new("sector", "Sector")
            .accessor(AgentReport::sectors_label)
            .hide_on_mobile(),
        Column::new("status", "Status").render(status_cell),
    ]
}

/// Today's attendance of the manager's agents.
#[component]
pub fn Attendance() -> Element {
    let api = use_api();
    let notices = use_notices();
    let mut query = use_signal(String::new);
    let columns = use_hook(columns);

    let reports = use_resource(move || {
        let api = api.clone();
        let mut notices = notices;
        async move {
            api.list_reports(ReportPeriod::Daily).await.unwrap_or_else(|e| {
                notify_error(&mut notices, "Could not load attendance", &e);
                Vec::new()
            })
        }
    });

    let loading = reports.read().is_none();
    let rows: Vec<AgentReport> = reports
        .read()
        .iter()
        .flatten()
        .filter(|r| r.matches(&query.read()))
        .cloned()
        .collect();

    rsx! {
        section { class: "page",
            header { class: "page-header",
                h1 { "Daily agents' attendance" }
                input {
                    class: "table-filter",
                    r#type: "search",
                    placeholder: "Filter agents",
                    value: "{query}",
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
            }
            DataTable::<AgentReport> {
                rows,
                columns,
                selectable: true,
                rows_per_page: 5,
                loading,
                empty_message: "No attendance recorded today",
            }
        }
    }
}
