use api::{Notification, NotificationFeed};
use dioxus::prelude::*;
use ui::{notify_error, use_api, use_notices, Column, DataTable};

#[component]
pub fn Notifications() -> Element {
    let api = use_api();
    let notices = use_notices();
    let mut feed = use_signal(NotificationFeed::default);
    let mut loaded = use_signal(|| false);

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        let mut notices = notices;
        async move {
            match api.list_notifications().await {
                Ok(latest) => feed.set(latest),
                Err(e) => notify_error(&mut notices, "Could not load notifications", &e),
            }
            loaded.set(true);
        }
    });

    let columns = use_hook(move || {
        vec![
            Column::new("title", "Title").accessor(|n: &Notification| n.title.clone()),
            Column::new("message", "Message")
                .accessor(|n: &Notification| n.message.clone())
                .hide_on_mobile(),
            Column::new("sender", "From")
                .accessor(|n: &Notification| format!("{} ({})", n.sender_name, n.sender_work_id))
                .hide_on_mobile(),
            Column::new("sent", "Sent").accessor(Notification::sent_label),
            Column::new("status", "").render(move |n: &Notification| {
                if n.read {
                    return rsx! { span { class: "badge", "Read" } };
                }
                let api = api.clone();
                let id = n.id;
                rsx! {
                    button {
                        class: "btn-secondary",
                        onclick: move |_| {
                            let api = api.clone();
                            let mut notices = notices;
                            let mut feed = feed;
                            async move {
                                match api.mark_notification_read(id).await {
                                    Ok(()) => feed.write().mark_read(id),
                                    Err(e) => notify_error(&mut notices, "Could not update notification", &e),
                                }
                            }
                        },
                        "Mark read"
                    }
                }
            }),
        ]
    });

    let current = feed();

    rsx! {
        section { class: "page",
            header { class: "page-header",
                h1 { "Notifications" }
                span { class: "badge", "{current.unread_count} unread" }
            }
            DataTable::<Notification> {
                rows: current.notifications,
                columns,
                loading: !loaded(),
                empty_message: "No notifications",
            }
        }
    }
}
