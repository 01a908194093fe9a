//! Hosted identity provider addressed by a publishable key.
//!
//! A publishable key looks like `pk_test_<base64>` or `pk_live_<base64>`; the
//! payload decodes to the instance's frontend API host followed by `$`.

use crate::backend::auth::provider::AuthProvider;
use crate::backend::auth::session::Session;
use crate::utils::{Error, Result};
use crate::simple_error;
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::RwLock;
use std::time::Duration;
use tokio::sync::OnceCell;

const KEY_PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInstance {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishableKey {
    pub instance: KeyInstance,
    pub frontend_api: String,
}

impl PublishableKey {
    pub fn parse(key: &str) -> Result<Self> {
        let key = key.trim();
        let (instance, payload) = if let Some(rest) = key.strip_prefix("pk_test_") {
            (KeyInstance::Development, rest)
        } else if let Some(rest) = key.strip_prefix("pk_live_") {
            (KeyInstance::Production, rest)
        } else {
            return Err(simple_error!("Publishable key must start with pk_test_ or pk_live_"));
        };

        let decoded = String::from_utf8(KEY_PAYLOAD.decode(payload)?)?;
        let frontend_api = decoded
            .strip_suffix('$')
            .filter(|host| !host.is_empty() && !host.contains(['/', ' ']))
            .ok_or_else(|| simple_error!("Publishable key does not encode a frontend API host"))?;

        Ok(Self {
            instance,
            frontend_api: frontend_api.to_string(),
        })
    }

    pub fn environment_url(&self) -> String {
        format!("https://{}/v1/environment", self.frontend_api)
    }

    /// Hosted account pages live next to the frontend API.
    pub fn accounts_url(&self) -> String {
        let host = &self.frontend_api;
        if let Some(slug) = host.strip_suffix(".clerk.accounts.dev") {
            format!("https://{slug}.accounts.dev/sign-in")
        } else if let Some(domain) = host.strip_prefix("clerk.") {
            format!("https://accounts.{domain}/sign-in")
        } else {
            format!("https://{host}/sign-in")
        }
    }
}

/// Instance settings returned by the environment endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub display_config: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub application_name: String,
    #[serde(default)]
    pub sign_in_url: Option<String>,
}

pub struct HostedAuth {
    key: PublishableKey,
    client: reqwest::Client,
    environment: OnceCell<Environment>,
    session: RwLock<Option<Session>>,
    session_path: PathBuf,
}

impl HostedAuth {
    pub fn new(publishable_key: &str, session_path: PathBuf) -> Result<Self> {
        let key = PublishableKey::parse(publishable_key)?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        log::info!(
            "Using hosted auth at {} ({:?})",
            key.frontend_api,
            key.instance
        );

        Ok(Self {
            key,
            client,
            environment: OnceCell::new(),
            session: RwLock::new(None),
            session_path,
        })
    }

    pub fn key(&self) -> &PublishableKey {
        &self.key
    }

    /// Fetches instance settings and restores the saved session, once.
    pub async fn ready(&self) -> Result<&Environment> {
        self.environment
            .get_or_try_init(|| async {
                let environment = self.fetch_environment().await?;
                if let Some(saved) = Session::load(&self.session_path).await {
                    log::info!("Restored session for {}", saved.user_id);
                    self.set_session(Some(saved))?;
                }
                Ok::<_, Error>(environment)
            })
            .await
    }

    async fn fetch_environment(&self) -> Result<Environment> {
        let url = self.key.environment_url();
        log::debug!("Fetching auth environment from {url}");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let environment: Environment = response.json().await?;

        log::info!(
            "Auth ready for '{}'",
            environment.display_config.application_name
        );
        Ok(environment)
    }

    pub fn session(&self) -> Result<Option<Session>> {
        self.session
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| simple_error!("Session state is poisoned"))
    }

    fn set_session(&self, session: Option<Session>) -> Result<()> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| simple_error!("Session state is poisoned"))?;
        *guard = session;
        Ok(())
    }

    /// Signs in and remembers the session on disk.
    pub async fn sign_in(&self, user_id: &str, display_name: &str) -> Result<Session> {
        let user_id = user_id.trim();
        if !Session::is_valid_identifier(user_id) {
            return Err(simple_error!(
                "User ID must be 3-64 characters long and can only contain letters, numbers, '_' and '-'"
            ));
        }

        self.ready().await?;

        let session = Session::new(user_id.to_string(), display_name.trim().to_string());
        if let Err(e) = session.save(&self.session_path).await {
            log::warn!("Failed to save session: {e}");
        }
        self.set_session(Some(session.clone()))?;

        log::info!("Signed in as {user_id}");
        Ok(session)
    }

    /// Signs out and forgets the saved session.
    pub async fn sign_out(&self) -> Result<()> {
        self.set_session(None)?;
        Session::delete(&self.session_path).await?;
        log::info!("Signed out");
        Ok(())
    }

    /// Page where the user can sign in or manage their account in a browser.
    pub fn account_portal_url(&self) -> String {
        self.environment
            .get()
            .and_then(|env| env.display_config.sign_in_url.clone())
            .filter(|url| url.starts_with("https://"))
            .unwrap_or_else(|| self.key.accounts_url())
    }
}

impl AuthProvider for HostedAuth {
    fn ensure_ready(&self) -> BoxFuture<'_, Result<()>> {
        async move { self.ready().await.map(|_| ()) }.boxed()
    }

    fn current_identity(&self) -> Result<Option<String>> {
        Ok(self
            .session()?
            .map(|session| session.user_id)
            .filter(|id| !id.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_KEY: &str = "pk_test_ZGF5Ym9vay00Mi5jbGVyay5hY2NvdW50cy5kZXYk";
    const LIVE_KEY: &str = "pk_live_Y2xlcmsuZXhhbXBsZS5jb20k";

    fn hosted(key: &str) -> HostedAuth {
        let path = std::env::temp_dir()
            .join(format!("daybook-hosted-{}", std::process::id()))
            .join("session.json");
        HostedAuth::new(key, path).unwrap()
    }

    #[test]
    fn parses_development_key() {
        let key = PublishableKey::parse(DEV_KEY).unwrap();
        assert_eq!(key.instance, KeyInstance::Development);
        assert_eq!(key.frontend_api, "daybook-42.clerk.accounts.dev");
        assert_eq!(
            key.environment_url(),
            "https://daybook-42.clerk.accounts.dev/v1/environment"
        );
    }

    #[test]
    fn parses_production_key() {
        let key = PublishableKey::parse(LIVE_KEY).unwrap();
        assert_eq!(key.instance, KeyInstance::Production);
        assert_eq!(key.frontend_api, "clerk.example.com");
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(PublishableKey::parse("sk_test_Y2xlcmsuZXhhbXBsZS5jb20k").is_err());
        assert!(PublishableKey::parse("pk_test_not base64!").is_err());
        // Decodes fine but lacks the trailing `$`
        assert!(PublishableKey::parse("pk_test_bm8tdGVybWluYXRvci5kZXY=").is_err());
        assert!(PublishableKey::parse("").is_err());
    }

    #[test]
    fn accounts_url_follows_instance_kind() {
        assert_eq!(
            PublishableKey::parse(DEV_KEY).unwrap().accounts_url(),
            "https://daybook-42.accounts.dev/sign-in"
        );
        assert_eq!(
            PublishableKey::parse(LIVE_KEY).unwrap().accounts_url(),
            "https://accounts.example.com/sign-in"
        );
    }

    #[test]
    fn identity_tracks_session() {
        let auth = hosted(DEV_KEY);
        assert_eq!(auth.current_identity().unwrap(), None);

        auth.set_session(Some(Session::new("user_7".into(), String::new())))
            .unwrap();
        assert_eq!(auth.current_identity().unwrap().as_deref(), Some("user_7"));

        auth.set_session(None).unwrap();
        assert_eq!(auth.current_identity().unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_identifier_fails_before_any_request() {
        let auth = hosted(DEV_KEY);
        let err = auth.sign_in("a b", "").await.unwrap_err();
        assert!(err.message().starts_with("User ID must be"));
        assert_eq!(auth.current_identity().unwrap(), None);
    }

    #[test]
    fn portal_url_falls_back_to_key_before_ready() {
        let auth = hosted(LIVE_KEY);
        assert_eq!(auth.account_portal_url(), "https://accounts.example.com/sign-in");
    }
}
