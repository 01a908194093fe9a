//! Layout that runs the navigation guard before a page is shown.

use crate::backend::router::{
    FALLBACK_PATH, GuardDecision, NavigationRequest, Resolution, RouteDescriptor, resolve,
};
use crate::frontend::app::main::Route;
use crate::frontend::components::layout::Navigation;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::{Outlet, navigator, use_route};

/// Location and identity a decision was made for.
type DecisionKey = (String, Option<String>);

#[component]
pub fn Guarded() -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let location = use_route::<Route>().to_string();
    let identity = auth.identity();
    let mut source = use_signal(|| None::<&'static RouteDescriptor>);

    // Re-runs on every route change and every sign-in/sign-out
    let decision = use_resource(use_reactive(
        (&location, &identity),
        move |(location, identity)| {
            let guard = auth.guard();
            async move {
                let key: DecisionKey = (location, identity);
                let Resolution::Matched(target) = resolve(&key.0) else {
                    return (key, GuardDecision::Redirect(FALLBACK_PATH));
                };

                let request = NavigationRequest {
                    target,
                    source: *source.peek(),
                };
                let decision = guard.check(&request).await;
                if decision == GuardDecision::Proceed {
                    source.set(Some(target));
                }
                (key, decision)
            }
        },
    ));

    // A decision made for another location or identity is stale
    let current: DecisionKey = (location, identity);
    match &*decision.read() {
        Some((key, GuardDecision::Proceed)) if *key == current => rsx! {
            Navigation {}
            main { class: "content", Outlet::<Route> {} }
        },
        Some((key, GuardDecision::Redirect(to))) if *key == current => {
            nav.replace(*to);
            rsx! { div { class: "loading" } }
        }
        _ => rsx! {
            div { class: "loading", "Loading..." }
        },
    }
}
