//! Application routing system.

use crate::frontend::components::layout::Guarded;
use crate::frontend::pages::dashboard::Dashboard as DashboardPage;
use crate::frontend::pages::profile::Profile as ProfilePage;
use crate::frontend::pages::settings::Settings as SettingsPage;
use crate::frontend::pages::today::Today as TodayPage;
use crate::frontend::pages::unmatched::Unmatched as UnmatchedPage;

use dioxus::prelude::*;
use dioxus_router::Routable;

#[component]
pub fn Today() -> Element {
    rsx! { TodayPage {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
pub fn Settings() -> Element {
    rsx! { SettingsPage {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfilePage {} }
}

#[component]
pub fn Unmatched(segments: Vec<String>) -> Element {
    rsx! { UnmatchedPage { segments } }
}

/// Main routing enum for the application.
///
/// Auth requirements are not declared here; the guarded layout looks them up
/// in the backend route table by path.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Guarded)]
        #[redirect("/", || Route::Today {})]
        #[route("/today")]
        Today {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/settings")]
        Settings {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    /// Anything else.
    #[route("/:..segments")]
    Unmatched { segments: Vec<String> },
}
