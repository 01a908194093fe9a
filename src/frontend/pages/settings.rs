use crate::backend::utils::config::AppConfig;
use crate::frontend::services::toast;
use dioxus::prelude::*;

#[component]
pub fn Settings() -> Element {
    let mut config = use_context::<Signal<AppConfig>>();
    let theme = config.read().ui.theme;
    let toast_options = config.read().toast.clone();

    let toggle_theme = move |_: MouseEvent| {
        let next = theme.toggled();
        config.write().ui.theme = next;
        let snapshot = config.read().clone();
        spawn(async move {
            match snapshot.save().await {
                Ok(()) => toast::success(format!("Theme set to {}", next.class())),
                Err(e) => {
                    log::error!("Failed to save config: {e}");
                    toast::warning("Theme changed for this session only");
                }
            }
        });
    };

    rsx! {
        section { class: "card",
            h2 { "Appearance" }
            p { class: "muted", "Current theme: {theme.class()}" }
            button { class: "button", onclick: toggle_theme, "Switch theme" }
        }
        section { class: "card",
            h2 { "Notifications" }
            p { class: "muted",
                "Shown for {toast_options.timeout} ms, position {toast_options.position:?}."
            }
            button {
                class: "button secondary",
                onclick: move |_| toast::info("This is how notifications look"),
                "Preview notification"
            }
        }
    }
}
