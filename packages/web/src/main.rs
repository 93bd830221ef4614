use dioxus::prelude::*;

use store::DashboardConfig;
use ui::{use_route_policy, use_session, AuthGuard, NoticeList, NoticeProvider, SessionProvider};
use views::{
    Agents, Attendance, ForgotPassword, Home, Login, Managers, NotFound, Notifications,
    Performance, Reports, ResetPasswords, Settings, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guarded)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/forgot-password")]
        ForgotPassword {},
        #[layout(Shell)]
            #[route("/home")]
            Home {},
            #[route("/agents")]
            Agents {},
            #[route("/reports")]
            Reports {},
            #[route("/attendance")]
            Attendance {},
            #[route("/performance")]
            Performance {},
            #[route("/settings")]
            Settings {},
            #[route("/admin/managers")]
            Managers {},
            #[route("/admin/reset-passwords")]
            ResetPasswords {},
            #[route("/admin/notifications")]
            Notifications {},
            #[route("/admin/settings")]
            AdminSettings {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Browser builds take the API location at compile time; native builds read
/// `dashboard.toml` and the environment.
fn load_config() -> DashboardConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let config = DashboardConfig::default();
        match option_env!("API_URL") {
            Some(url) => config.with_api_url(url),
            None => config,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        api::config::load_config(std::path::Path::new(DashboardConfig::filename()))
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider { config,
            NoticeProvider {
                NoticeList {}
                Router::<Route> {}
            }
        }
    }
}

/// Runs the access check for every route before rendering it.
#[component]
fn Guarded() -> Element {
    let route = use_route::<Route>();
    rsx! {
        AuthGuard { path: route.to_string(), Outlet::<Route> {} }
    }
}

/// Profile and password page for admins, under the admin prefix.
#[component]
fn AdminSettings() -> Element {
    rsx! {
        Settings {}
    }
}

/// Redirect `/` to the landing page of the signed-in role.
#[component]
fn Root() -> Element {
    let session = use_session();
    let policy = use_route_policy();
    let nav = use_navigator();

    use_effect(move || {
        let target = policy.landing_or_login(session.read().role()).to_string();
        nav.replace(target);
    });

    rsx! {}
}
