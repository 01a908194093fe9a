//! Authentication context and state management.

use crate::backend::auth::{AuthProvider, HostedAuth, Session};
use crate::backend::router::NavigationGuard;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::paths::app_file;
use dioxus::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    /// `None` when no publishable key is configured.
    pub provider: Option<Arc<HostedAuth>>,
    pub session: Signal<Option<Session>>,
}

impl AuthState {
    /// Builds the provider from config. Must run inside a component scope.
    pub fn from_config(config: &AppConfig) -> Self {
        let provider = config
            .auth
            .publishable_key
            .as_deref()
            .and_then(|key| match HostedAuth::new(key, app_file("session.json")) {
                Ok(auth) => Some(Arc::new(auth)),
                Err(e) => {
                    log::error!("Hosted auth disabled: {e}");
                    None
                }
            });

        if provider.is_none() {
            log::warn!("No usable publishable key, every visitor is signed out");
        }

        Self {
            provider,
            session: Signal::new(None),
        }
    }

    /// Guard wired to this state's provider.
    pub fn guard(&self) -> NavigationGuard {
        NavigationGuard::new(
            self.provider
                .clone()
                .map(|provider| provider as Arc<dyn AuthProvider>),
        )
    }

    /// Waits for the provider and mirrors any restored session into the UI.
    pub async fn restore(&mut self) {
        let Some(provider) = self.provider.clone() else {
            return;
        };

        if let Err(e) = provider.ready().await {
            log::error!("Auth provider failed to load: {e}");
            return;
        }

        match provider.session() {
            Ok(Some(session)) => self.session.set(Some(session)),
            Ok(None) => {}
            Err(e) => log::error!("Failed to read session: {e}"),
        }
    }

    /// Signs in through the provider.
    pub async fn sign_in(&mut self, user_id: String, display_name: String) -> Result<Session, String> {
        let Some(provider) = self.provider.clone() else {
            return Err("Sign-in is not configured".to_string());
        };

        let session = provider
            .sign_in(&user_id, &display_name)
            .await
            .map_err(|e| e.message().to_string())?;
        self.session.set(Some(session.clone()));

        Ok(session)
    }

    /// Signs out the current user.
    pub async fn sign_out(&mut self) {
        if let Some(provider) = self.provider.clone() {
            if let Err(e) = provider.sign_out().await {
                log::warn!("Failed to clear saved session: {e}");
            }
        }
        self.session.set(None);
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    /// Identifier used to key guard decisions to the session they were made for.
    pub fn identity(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.user_id.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Opens the hosted account page in the system browser.
    pub fn open_account_portal(&self) {
        let Some(provider) = &self.provider else {
            return;
        };

        let url = provider.account_portal_url();
        if let Err(e) = webbrowser::open(&url) {
            log::error!("Failed to open account page {url}: {e}");
        }
    }
}
