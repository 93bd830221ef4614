//! Shared UI for the dashboard: session context, route guarding, the data
//! table and the navigation shell.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod guard;
pub use guard::{evaluate, GuardState, Restriction, RoutePolicy};

pub mod table;
pub use table::{Cell, Column, ControlledPage, DataTable, RowKey, TableRow};

mod session;
pub use session::{make_client, make_session_store};

mod auth;
pub use auth::{
    use_api, use_route_policy, use_session, use_session_store, AuthGuard, LogoutButton,
    SessionProvider,
};

pub mod notice;
pub use notice::{
    notify_error, push_notice, use_notices, NoticeLevel, NoticeList, NoticeProvider, Notices,
};

mod navbar;
pub use navbar::{nav_items, Navbar};
