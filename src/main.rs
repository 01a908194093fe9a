mod backend;
mod frontend;
mod utils;

use crate::backend::utils::config::AppConfig;
use crate::backend::utils::css::ResourceLoader;
use crate::frontend::app::main::Route;
use crate::frontend::components::common::Toaster;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::toast::{TOASTS, ToastQueue};
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Logging setup
    utils::logging::init(&config.logging.filter);
    if let Some(e) = config_error {
        log::error!(
            "Failed to load {:?}, using defaults: {e}",
            AppConfig::get_config_path()
        );
    }

    let size = LogicalSize::new(config.window.width, config.window.height);
    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Daybook")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                .with_resizable(config.window.resizable),
        )
        .with_menu(None);

    let _ = CONFIG.set(config);
    LaunchBuilder::new().with_cfg(desktop).launch(AppRoot);
}

#[component]
fn AppRoot() -> Element {
    let config = use_context_provider(|| Signal::new(CONFIG.get().cloned().unwrap_or_default()));
    let auth = use_context_provider(|| AuthState::from_config(&config.peek()));

    use_hook(|| *TOASTS.write() = ToastQueue::new(config.peek().toast.clone()));

    // Restore a remembered session once the provider is up
    use_future(move || {
        let mut auth = auth.clone();
        async move { auth.restore().await }
    });

    let theme = config.read().ui.theme.class();
    let styles = ResourceLoader::combine_css(&["base", "navigation", "toast", "pages"]);

    rsx! {
        style { dangerous_inner_html: styles }
        div { class: "app {theme}",
            Router::<Route> {}
            Toaster {}
        }
    }
}
