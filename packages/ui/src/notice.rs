//! Non-blocking inline messages.
//!
//! Pages report request failures and confirmations with [`push_notice`]; the
//! [`NoticeList`] mounted by the app shell shows them until dismissed.

use api::ApiError;
use dioxus::prelude::*;

use crate::{icons, Icon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice info",
            NoticeLevel::Success => "notice success",
            NoticeLevel::Warning => "notice warning",
            NoticeLevel::Error => "notice error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

/// Queue of notices currently on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

/// Oldest notices are dropped beyond this many.
const MAX_NOTICES: usize = 5;

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>, timestamp: String) -> u64 {
        self.next_id += 1;
        self.entries.push(Notice {
            id: self.next_id,
            timestamp,
            level,
            message: message.into(),
        });
        if self.entries.len() > MAX_NOTICES {
            let excess = self.entries.len() - MAX_NOTICES;
            self.entries.drain(..excess);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|notice| notice.id != id);
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Show a message. Errors are also logged.
pub fn push_notice(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    if level == NoticeLevel::Error {
        tracing::error!("{message}");
    }
    let ts = current_time();
    notices.write().push(level, message, ts);
}

/// Report a failed request. Auth failures are only logged: the session is
/// already cleared and the route guard sends the user to login.
pub fn notify_error(notices: &mut Signal<Notices>, action: &str, err: &ApiError) {
    if err.is_auth_failure() {
        tracing::warn!(%err, "{action}");
        return;
    }
    push_notice(notices, NoticeLevel::Error, &format!("{action}: {err}"));
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    format!("{h:02}:{m:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

/// Provides the notice queue to descendants.
#[component]
pub fn NoticeProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notices::default()));
    rsx! {
        {children}
    }
}

#[component]
pub fn NoticeList() -> Element {
    let mut notices = use_notices();
    let entries = notices().entries;

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "notice-list", role: "status",
            for notice in entries {
                div { key: "{notice.id}", class: notice.level.class(),
                    span { class: "notice-time", "{notice.timestamp}" }
                    span { class: "notice-message", "{notice.message}" }
                    button {
                        class: "notice-dismiss",
                        title: "Dismiss",
                        onclick: move |_| notices.write().dismiss(notice.id),
                        Icon { icon: icons::FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded_and_dismissable() {
        let mut notices = Notices::default();
        for i in 0..7 {
            notices.push(NoticeLevel::Info, format!("n{i}"), "09:00".into());
        }
        assert_eq!(notices.entries.len(), MAX_NOTICES);
        assert_eq!(notices.entries[0].message, "n2");

        let id = notices.entries[1].id;
        notices.dismiss(id);
        assert!(notices.entries.iter().all(|n| n.id != id));
        assert_eq!(notices.entries.len(), MAX_NOTICES - 1);
    }
}
