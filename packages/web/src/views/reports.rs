use api::{AgentReport, ReportPeriod};
use dioxus::prelude::*;
use ui::{notify_error, use_api, use_notices, Column, DataTable};

fn columns() -> Vec<Column<AgentReport>> {
    vec![
        Column::new("agent", "Agent").accessor(|r: &AgentReport| r.agent_name.clone()),
        Column::new("workId", "Work ID").accessor(|r: &AgentReport| r.work_id.clone()),
        Column::new("clients", "Clients engaged")
            .accessor(|r: &AgentReport| r.total_clients_engaged.to_string()),
        Column::new("days", "Days worked")
            .accessor(|r: &AgentReport| r.days_worked.to_string())
            .hide_on_mobile(),
        Column::new("sectors", "Sectors")
            .accessor(AgentReport::sectors_label)
            .hide_on_mobile(),
        Column::new("comment", "Comment")
            .accessor(|r: &AgentReport| r.daily_comment.clone())
            .hide_on_mobile(),
    ]
}

/// Agent activity for the selected period.
#[component]
pub fn Reports() -> Element {
    let api = use_api();
    let notices = use_notices();
    let mut period = use_signal(ReportPeriod::default);
    let columns = use_hook(columns);

    let reports = use_resource(move || {
        let api = api.clone();
        let mut notices = notices;
        let period = period();
        async move {
            api.list_reports(period).await.unwrap_or_else(|e| {
                notify_error(&mut notices, "Could not load reports", &e);
                Vec::new()
            })
        }
    });

    let rows = reports.read().clone();
    let loading = rows.is_none();
    let current = period();
    let options: Vec<(&str, &str, bool)> = ReportPeriod::ALL
        .into_iter()
        .map(|p| (p.as_str(), p.label(), p == current))
        .collect();

    rsx! {
        section { class: "page",
            header { class: "page-header",
                h1 { "Reports" }
                label { class: "period-select",
                    "Period"
                    select {
                        value: current.as_str(),
                        onchange: move |evt: FormEvent| {
                            if let Some(p) = ReportPeriod::parse(&evt.value()) {
                                period.set(p);
                            }
                        },
                        for (value, label, selected) in options {
                            option { key: "{value}", value, selected, "{label}" }
                        }
                    }
                }
            }
            DataTable::<AgentReport> {
                rows: rows.unwrap_or_default(),
                columns,
                loading,
                empty_message: "No reports for this period",
            }
        }
    }
}
