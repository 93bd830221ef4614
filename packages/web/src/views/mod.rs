use dioxus::prelude::*;

mod shell;
pub use shell::Shell;

mod login;
pub use login::Login;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod home;
pub use home::Home;

mod agents;
pub use agents::Agents;

mod reports;
pub use reports::Reports;

mod attendance;
pub use attendance::Attendance;

mod performance;
pub use performance::Performance;

mod settings;
pub use settings::Settings;

mod managers;
pub use managers::Managers;

mod reset_passwords;
pub use reset_passwords::ResetPasswords;

mod notifications;
pub use notifications::Notifications;

mod not_found;
pub use not_found::NotFound;

/// Labelled form input.
#[component]
pub(crate) fn Field(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{label}" }
            input {
                class: "field-input",
                r#type: "{kind}",
                required,
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}
