//! Application configuration.
//!
//! Defaults are overlaid by `config.json` in the application directory and
//! then by the environment. Every section is optional in the file.

use crate::backend::utils::paths::app_file;
use crate::utils::Result;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// Environment variable carrying the hosted auth publishable key.
pub const PUBLISHABLE_KEY_ENV: &str = "CLERK_PUBLISHABLE_KEY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub toast: ToastOptions,
    pub ui: UiConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// `pk_test_...` or `pk_live_...`. Without it the app runs signed out.
    pub publishable_key: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub const fn class(self) -> &'static str {
        match self {
            Self::TopLeft => "toasts top-left",
            Self::TopCenter => "toasts top-center",
            Self::TopRight => "toasts top-right",
            Self::BottomLeft => "toasts bottom-left",
            Self::BottomCenter => "toasts bottom-center",
            Self::BottomRight => "toasts bottom-right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastOptions {
    pub position: ToastPosition,
    /// Milliseconds a toast stays on screen.
    pub timeout: u64,
    pub close_on_click: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
}

impl ToastOptions {
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            timeout: 3000,
            close_on_click: true,
            pause_on_hover: true,
            draggable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 720.0,
            resizable: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub filter: String,
}

impl AppConfig {
    /// Gets the path to the config file.
    pub fn get_config_path() -> PathBuf {
        app_file("config.json")
    }

    /// Loads the config from the default location and applies the environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::get_config_path())?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overlays values taken from the environment.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(PUBLISHABLE_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.auth.publishable_key = Some(key.trim().to_string());
        }
    }

    /// Saves the config to the default location.
    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()).await
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;
        log::debug!("Saved config to {path:?}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_match_the_stock_options() {
        let options = ToastOptions::default();
        assert_eq!(options.position, ToastPosition::TopRight);
        assert_eq!(options.timeout(), Duration::from_millis(3000));
        assert!(options.close_on_click);
        assert!(options.pause_on_hover);
        assert!(options.draggable);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "toast": { "position": "bottom-left" }, "ui": { "theme": "dark" } }"#)
                .unwrap();
        assert_eq!(config.toast.position, ToastPosition::BottomLeft);
        assert_eq!(config.toast.timeout, 3000);
        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(config.window, WindowConfig::default());
        assert!(config.auth.publishable_key.is_none());
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut config = AppConfig::default();
        config.auth.publishable_key = Some("pk_test_file".into());
        config.apply_env(|name| (name == PUBLISHABLE_KEY_ENV).then(|| " pk_test_env ".to_string()));
        assert_eq!(config.auth.publishable_key.as_deref(), Some("pk_test_env"));
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let mut config = AppConfig::default();
        config.auth.publishable_key = Some("pk_test_file".into());
        config.apply_env(|_| Some("   ".to_string()));
        assert_eq!(config.auth.publishable_key.as_deref(), Some("pk_test_file"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("daybook-no-such-dir").join("config.json");
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[tokio::test]
    async fn saved_config_loads_back() {
        let path = std::env::temp_dir()
            .join(format!("daybook-config-{}", std::process::id()))
            .join("config.json");
        let mut config = AppConfig::default();
        config.ui.theme = Theme::Dark;
        config.save_to(&path).await.unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap().ui.theme, Theme::Dark);
        let _ = std::fs::remove_file(&path);
    }
}
