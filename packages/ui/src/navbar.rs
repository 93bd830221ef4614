use dioxus::prelude::*;
use store::Role;

use crate::auth::{use_session, LogoutButton};

/// Navigation entries shown to `role`, as `(label, path)`.
pub fn nav_items(role: &Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Admin => &[
            ("Managers", "/admin/managers"),
            ("Reset passwords", "/admin/reset-passwords"),
            ("Notifications", "/admin/notifications"),
            ("Settings", "/admin/settings"),
        ],
        Role::Manager => &[
            ("Dashboard", "/home"),
            ("Agents", "/agents"),
            ("Reports", "/reports"),
            ("Attendance", "/attendance"),
            ("Performance", "/performance"),
            ("Settings", "/settings"),
        ],
        _ => &[],
    }
}

fn link_class(active: &str, path: &str) -> &'static str {
    if active.starts_with(path) {
        "navbar-link active"
    } else {
        "navbar-link"
    }
}

/// Top bar with the links of the signed-in user's role.
#[component]
pub fn Navbar(#[props(default)] active: String) -> Element {
    let session = use_session();
    let session = session.read();
    let Some(user) = session.user.as_ref() else {
        return rsx! {};
    };
    let links: Vec<_> = nav_items(&user.role)
        .iter()
        .map(|&(label, path)| (label, path, link_class(&active, path)))
        .collect();
    let name = if user.name.is_empty() {
        user.work_id.clone()
    } else {
        user.name.clone()
    };

    rsx! {
        nav { class: "navbar",
            span { class: "navbar-brand", "Operations" }
            ul { class: "navbar-links",
                for (label, path, class) in links {
                    li { key: "{path}",
                        Link {
                            class: "{class}",
                            to: path,
                            "{label}"
                        }
                    }
                }
            }
            div { class: "navbar-user",
                span { class: "navbar-user-name", "{name}" }
                span { class: "navbar-user-role", "{user.role}" }
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
