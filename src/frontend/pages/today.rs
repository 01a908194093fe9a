//! Public landing page with the sign-in form.

use crate::frontend::services::context::AuthState;
use crate::frontend::services::toast;
use chrono::Local;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::use_navigator;

#[component]
pub fn Today() -> Element {
    let auth = use_context::<AuthState>();
    let date = Local::now().format("%A, %B %-d").to_string();

    rsx! {
        section { class: "card",
            h2 { "{date}" }
            p { class: "muted", "Plan the day, then get to it." }
        }
        if let Some(session) = auth.session.read().clone() {
            section { class: "card",
                h2 { "Welcome back, {session.label()}" }
                p { class: "muted", "Your dashboard is ready." }
            }
        } else if auth.is_configured() {
            SignIn {}
        } else {
            section { class: "card",
                h2 { "Sign-in unavailable" }
                p { class: "muted",
                    "Set CLERK_PUBLISHABLE_KEY to enable sign-in. Until then only this page is available."
                }
            }
        }
    }
}

#[component]
fn SignIn() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let mut user_id = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = use_callback({
        let auth = auth.clone();
        move |()| {
            if busy() {
                return;
            }
            busy.set(true);
            error.set(None);

            let mut auth = auth.clone();
            let id = user_id.read().trim().to_string();
            let name = display_name.read().trim().to_string();
            spawn(async move {
                match auth.sign_in(id, name).await {
                    Ok(session) => {
                        toast::success(format!("Signed in as {}", session.label()));
                        nav.push("/dashboard");
                    }
                    Err(e) => {
                        log::warn!("Sign-in failed: {e}");
                        toast::error("Sign-in failed");
                        error.set(Some(e));
                    }
                }
                busy.set(false);
            });
        }
    });

    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            submit.call(());
        }
    };

    rsx! {
        section { class: "card",
            h2 { "Sign in" }
            div { class: "field",
                input {
                    r#type: "text",
                    value: "{user_id}",
                    maxlength: "64",
                    placeholder: "User ID",
                    autofocus: true,
                    oninput: move |e| user_id.set(e.value()),
                    onkeydown: on_keydown,
                }
                input {
                    r#type: "text",
                    value: "{display_name}",
                    placeholder: "Display name (optional)",
                    oninput: move |e| display_name.set(e.value()),
                    onkeydown: on_keydown,
                }
                button {
                    class: "button",
                    disabled: busy(),
                    onclick: move |_| submit.call(()),
                    if busy() { "Signing in..." } else { "Sign in" }
                }
            }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
            div { class: "field",
                button {
                    class: "button secondary",
                    onclick: move |_| auth.open_account_portal(),
                    "Open account page"
                }
            }
        }
    }
}
