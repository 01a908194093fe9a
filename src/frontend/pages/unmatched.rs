use crate::backend::router::FALLBACK_PATH;
use dioxus::prelude::*;
use dioxus_router::navigator;

/// Catch-all: sends unknown locations to the fallback page.
#[component]
pub fn Unmatched(segments: Vec<String>) -> Element {
    let nav = navigator();
    log::debug!("No route for /{}, redirecting", segments.join("/"));
    nav.replace(FALLBACK_PATH);
    rsx! { div {} }
}
