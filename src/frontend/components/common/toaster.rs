//! Renders the global toast queue.

use crate::frontend::services::toast::TOASTS;
use dioxus::prelude::*;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

#[component]
pub fn Toaster() -> Element {
    // Countdown for every visible toast
    use_future(|| async move {
        loop {
            tokio::time::sleep(TICK).await;
            if !TOASTS.read().is_empty() {
                TOASTS.write().tick(TICK);
            }
        }
    });

    let position = TOASTS.read().options().position.class();
    let toasts = TOASTS.read().toasts().to_vec();

    rsx! {
        div { class: "{position}",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    onclick: move |_| {
                        TOASTS.write().click(toast.id);
                    },
                    onmouseenter: move |_| TOASTS.write().pause(toast.id),
                    onmouseleave: move |_| TOASTS.write().resume(toast.id),
                    onmousedown: move |e: MouseEvent| {
                        TOASTS.write().begin_drag(toast.id, e.client_coordinates().x);
                    },
                    onmouseup: move |e: MouseEvent| {
                        TOASTS.write().end_drag(toast.id, e.client_coordinates().x);
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
