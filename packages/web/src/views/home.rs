//! Manager dashboard: headline counts and the weekly activity breakdown.

use api::DashboardSummary;
use dioxus::prelude::*;
use ui::{notify_error, use_api, use_notices};

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let notices = use_notices();

    let summary = use_resource(move || {
        let api = api.clone();
        let mut notices = notices;
        async move {
            match api.dashboard_summary().await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    notify_error(&mut notices, "Could not load the dashboard", &e);
                    None
                }
            }
        }
    });

    let body = match &*summary.read() {
        None => rsx! { p { class: "data-loading", "Loading…" } },
        Some(None) => rsx! { p { class: "data-empty", "No dashboard data available." } },
        Some(Some(summary)) => rsx! { SummaryCards { summary: summary.clone() } },
    };

    rsx! {
        section { class: "page",
            h1 { "Dashboard" }
            {body}
        }
    }
}

#[component]
fn SummaryCards(summary: DashboardSummary) -> Element {
    let metrics = &summary.performance_metrics;
    let active = format!("{:.0}%", summary.active_ratio());
    let peak = summary.weekly_peak().max(1);
    let weekly: Vec<(String, u32, u32)> = summary
        .weekly_data
        .iter()
        .map(|point| (point.day.clone(), point.clients, point.clients * 100 / peak))
        .collect();

    rsx! {
        div { class: "stat-grid",
            Stat { label: "Total agents", value: summary.total_agents.to_string() }
            Stat { label: "Active agents", value: format!("{} ({active})", summary.active_agents) }
            Stat { label: "Clients engaged", value: metrics.total_clients.to_string() }
            Stat { label: "Average engagement", value: format!("{:.1}", metrics.average_engagement) }
            Stat { label: "Success rate", value: format!("{:.1}%", metrics.success_rate) }
        }

        h2 { "This week" }
        ul { class: "weekly-list",
            for (day, clients, width) in weekly {
                li { key: "{day}", class: "weekly-row",
                    span { class: "weekly-day", "{day}" }
                    span { class: "weekly-bar", style: "width: {width}%" }
                    span { class: "weekly-value", "{clients}" }
                }
            }
        }

        h2 { "Performance" }
        ul { class: "performance-list",
            for slice in summary.performance_data.iter() {
                li { key: "{slice.name}",
                    span { class: "swatch", style: "background: {slice.color}" }
                    "{slice.name}: {slice.value}"
                }
            }
        }
    }
}

#[component]
fn Stat(label: String, value: String) -> Element {
    rsx! {
        div { class: "stat",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
        }
    }
}
