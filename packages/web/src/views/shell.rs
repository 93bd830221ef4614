use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Navigation shell around every dashboard page.
#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div { class: "shell",
            Navbar { active: route.to_string() }
            main { class: "shell-content",
                Outlet::<Route> {}
            }
        }
    }
}
