use crate::frontend::services::context::AuthState;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    let auth = use_context::<AuthState>();
    let Some(session) = auth.session.read().clone() else {
        return rsx! { div { class: "loading" } };
    };
    let since = format_since(session.signed_in_at, Utc::now());

    rsx! {
        section { class: "card",
            h2 { "Hello, {session.label()}" }
            p { class: "muted", "Signed in {since}." }
        }
        section { class: "card",
            h2 { "Shortcuts" }
            div { class: "field",
                button {
                    class: "button secondary",
                    onclick: move |_| {
                        nav.push("/settings");
                    },
                    "Settings"
                }
                button {
                    class: "button secondary",
                    onclick: move |_| {
                        nav.push("/profile");
                    },
                    "Profile"
                }
            }
        }
    }
}

/// Coarse, human readable age of a timestamp.
pub fn format_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };

    match elapsed.num_minutes() {
        m if m < 1 => "just now".to_string(),
        m if m < 60 => plural(m, "minute"),
        _ if elapsed.num_hours() < 24 => plural(elapsed.num_hours(), "hour"),
        _ => plural(elapsed.num_days(), "day"),
    }
}
