use std::rc::Rc;

use dioxus::prelude::*;
use store::config::TableConfig;
use store::DashboardConfig;

use super::column::{Column, RowKey, TableRow};
use super::state::{mobile_columns, PageInfo, TableState};
use crate::{icons, Icon};

/// Page position owned by the caller, for data the backend paginates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlledPage {
    pub page: usize,
    pub total_pages: usize,
}

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<T: TableRow> {
    pub rows: Vec<T>,
    pub columns: Vec<Column<T>>,
    #[props(default)]
    pub selectable: bool,
    /// Overrides [`TableRow::row_key`].
    pub row_key: Option<RowKey<T>>,
    /// Initial page size; defaults to the configured one.
    pub rows_per_page: Option<usize>,
    /// Switches the table to caller-driven pagination: `rows` is shown as-is
    /// and navigation is reported through `on_page_change`.
    pub controlled: Option<ControlledPage>,
    pub on_page_change: Option<EventHandler<usize>>,
    /// Receives the selected keys, restricted to the current rows.
    pub on_selection_change: Option<EventHandler<Vec<String>>>,
    /// Disables navigation while a fetch is in flight.
    #[props(default)]
    pub loading: bool,
    #[props(default = "No records found".to_string(), into)]
    pub empty_message: String,
}

/// Paginated, optionally selectable table with a card layout for narrow screens.
#[allow(non_snake_case)]
pub fn DataTable<T: TableRow>(props: DataTableProps<T>) -> Element {
    let config: TableConfig = try_use_context::<DashboardConfig>()
        .map(|config| config.table)
        .unwrap_or_default();
    let mut state = use_signal(|| {
        TableState::new(props.rows_per_page.unwrap_or(config.rows_per_page))
    });

    let keys: Rc<Vec<String>> = Rc::new(
        props
            .rows
            .iter()
            .map(|row| match &props.row_key {
                Some(RowKey(key_of)) => key_of(row),
                None => row.row_key(),
            })
            .collect(),
    );

    // Keep the selection and page inside the current dataset.
    let tracked = keys.clone();
    let on_dataset_change = props.on_selection_change;
    use_effect(use_reactive!(|tracked| {
        let selection = {
            let mut table = state.write();
            table.retain(&tracked);
            table.clamp(tracked.len());
            table.selection(&tracked)
        };
        if let Some(handler) = on_dataset_change {
            handler.call(selection);
        }
    }));

    let len = props.rows.len();
    let loading = props.loading;
    let controlled = props.controlled;
    let selectable = props.selectable;
    let on_page_change = props.on_page_change;
    let on_selection_change = props.on_selection_change;

    let (info, range) = match controlled {
        Some(page) => (PageInfo::new(page.page, page.total_pages), 0..len),
        None => {
            let table = state.read();
            (table.page_info(len), table.page_range(len))
        }
    };

    let report = move |keys: &[String]| {
        if let Some(handler) = on_selection_change {
            handler.call(state.read().selection(keys));
        }
    };

    let mut turn_page = move |forward: bool| match controlled {
        Some(_) => {
            if let (Some(target), Some(handler)) = (info.step(forward, loading), on_page_change) {
                handler.call(target);
            }
        }
        None if loading => {}
        None if forward => state.write().next(len),
        None => state.write().prev(len),
    };

    let columns = &props.columns;
    let hidden: Vec<bool> = columns.iter().map(|c| c.hide_on_mobile).collect();
    let card_columns: Vec<&Column<T>> = mobile_columns(&hidden, config.mobile_columns)
        .into_iter()
        .map(|i| &columns[i])
        .collect();
    let span = columns.len() + usize::from(selectable);
    let all_selected = state.read().all_selected(&keys);
    let per_page = state.read().rows_per_page();
    let page_sizes = config.page_size_options.clone();

    let table_rows = range.clone().map(|i| {
        let row = &props.rows[i];
        let key = keys[i].clone();
        let selected = state.read().is_selected(&key);
        let keys = keys.clone();
        let toggle_key = key.clone();
        rsx! {
            tr {
                key: "{key}",
                class: if selected { "data-row selected" } else { "data-row" },
                if selectable {
                    td { class: "data-select",
                        input {
                            r#type: "checkbox",
                            checked: selected,
                            onchange: move |_| {
                                state.write().toggle(&toggle_key);
                                report(keys.as_slice());
                            },
                        }
                    }
                }
                for column in columns.iter() {
                    td { key: "{column.key}", {column.render_cell(row)} }
                }
            }
        }
    });

    let cards = range.map(|i| {
        let row = &props.rows[i];
        let key = keys[i].clone();
        let selected = state.read().is_selected(&key);
        let keys = keys.clone();
        let toggle_key = key.clone();
        rsx! {
            div {
                key: "{key}",
                class: if selected { "data-card selected" } else { "data-card" },
                if selectable {
                    input {
                        class: "data-select",
                        r#type: "checkbox",
                        checked: selected,
                        onchange: move |_| {
                            state.write().toggle(&toggle_key);
                            report(keys.as_slice());
                        },
                    }
                }
                for column in card_columns.iter() {
                    div { key: "{column.key}", class: "data-card-field",
                        span { class: "data-card-label", "{column.header}" }
                        span { class: "data-card-value", {column.render_cell(row)} }
                    }
                }
            }
        }
    });

    let select_all_keys = keys.clone();

    rsx! {
        div { class: if loading { "data-table loading" } else { "data-table" },
            table { class: "data-table-desktop",
                thead {
                    tr {
                        if selectable {
                            th { class: "data-select",
                                input {
                                    r#type: "checkbox",
                                    checked: all_selected,
                                    disabled: len == 0,
                                    onchange: move |_| {
                                        state.write().toggle_all(&select_all_keys);
                                        report(select_all_keys.as_slice());
                                    },
                                }
                            }
                        }
                        for column in columns.iter() {
                            th { key: "{column.key}", "{column.header}" }
                        }
                    }
                }
                tbody {
                    if len == 0 && !loading {
                        tr {
                            td { class: "data-empty", colspan: "{span}", "{props.empty_message}" }
                        }
                    }
                    {table_rows}
                }
            }

            div { class: "data-table-cards",
                if len == 0 && !loading {
                    p { class: "data-empty", "{props.empty_message}" }
                }
                {cards}
            }

            if loading {
                div { class: "data-loading", "Loading…" }
            }

            div { class: "data-pager",
                if controlled.is_none() {
                    label { class: "data-page-size",
                        "Rows per page"
                        select {
                            disabled: loading,
                            value: "{per_page}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(size) = evt.value().parse::<usize>() {
                                    state.write().set_rows_per_page(size);
                                }
                            },
                            for size in page_sizes {
                                option { key: "{size}", value: "{size}", selected: size == per_page, "{size}" }
                            }
                        }
                    }
                }
                span { class: "data-page-info", "Page {info.page} of {info.total_pages}" }
                button {
                    class: "data-page-prev",
                    disabled: loading || !info.can_prev(),
                    onclick: move |_| turn_page(false),
                    Icon { icon: icons::FaChevronLeft, width: 12, height: 12 }
                    "Previous"
                }
                button {
                    class: "data-page-next",
                    disabled: loading || !info.can_next(),
                    onclick: move |_| turn_page(true),
                    "Next"
                    Icon { icon: icons::FaChevronRight, width: 12, height: 12 }
                }
            }
        }
    }
}
