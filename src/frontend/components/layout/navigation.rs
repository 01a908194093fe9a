use crate::backend::router::RouteDescriptor;
use crate::backend::router::table::ROUTES;
use crate::frontend::app::main::Route;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::{navigator, use_route};

#[component]
pub fn Navigation() -> Element {
    let nav = navigator();
    let current = use_route::<Route>().to_string();
    let signed_in = use_context::<AuthState>().is_signed_in();

    rsx! {
        nav { class: "navigation",
            span { class: "brand", "Daybook" }
            for entry in ROUTES.iter() {
                span {
                    key: "{entry.path}",
                    class: nav_class(entry, &current, signed_in),
                    onclick: move |_| {
                        nav.push(entry.path);
                    },
                    "{entry.name}"
                }
            }
        }
    }
}

fn nav_class(entry: &RouteDescriptor, current: &str, signed_in: bool) -> &'static str {
    match (entry.path == current, entry.requires_auth && !signed_in) {
        (true, _) => "nav-item active",
        (false, true) => "nav-item locked",
        (false, false) => "nav-item",
    }
}
