use crate::backend::auth::hosted::KeyInstance;
use crate::backend::router::FALLBACK_PATH;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::toast;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let Some(session) = auth.session.read().clone() else {
        return rsx! { div { class: "loading" } };
    };

    let instance = match auth.provider.as_ref().map(|p| p.key().instance) {
        Some(KeyInstance::Production) => "Production",
        Some(KeyInstance::Development) => "Development",
        None => "Not configured",
    };
    let signed_in_at = session
        .signed_in_at
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();

    let portal = auth.clone();
    let sign_out = move |_: MouseEvent| {
        let mut auth = auth.clone();
        spawn(async move {
            auth.sign_out().await;
            toast::info("Signed out");
            nav.replace(FALLBACK_PATH);
        });
    };

    rsx! {
        section { class: "card",
            h2 { "{session.label()}" }
            p { class: "muted", "User ID: {session.user_id}" }
            p { class: "muted", "Signed in: {signed_in_at}" }
            p { class: "muted", "Instance: {instance}" }
        }
        section { class: "card",
            div { class: "field",
                button {
                    class: "button secondary",
                    onclick: move |_| portal.open_account_portal(),
                    "Manage account"
                }
                button { class: "button", onclick: sign_out, "Sign out" }
            }
        }
    }
}
