//! Locally remembered sign-in.

use crate::utils::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub display_name: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session stamped with the current time.
    pub fn new(user_id: String, display_name: String) -> Self {
        Self {
            user_id,
            display_name,
            signed_in_at: Utc::now(),
        }
    }

    /// Validates a user identifier: 3-64 ASCII alphanumerics, `_` or `-`.
    pub fn is_valid_identifier(user_id: &str) -> bool {
        (3..=64).contains(&user_id.len())
            && user_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    /// Name shown in the UI; the identifier when no display name was given.
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.user_id
        } else {
            &self.display_name
        }
    }

    /// Saves the session to disk.
    pub async fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;

        Ok(())
    }

    /// Loads a saved session. Unreadable or invalid files count as no session.
    pub async fn load(path: &Path) -> Option<Self> {
        match fs::read_to_string(path).await {
            Ok(json) => serde_json::from_str::<Self>(&json)
                .ok()
                .filter(|session| Self::is_valid_identifier(&session.user_id)),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read saved session {path:?}: {e}");
                None
            }
        }
    }

    /// Deletes the saved session file.
    pub async fn delete(path: &Path) -> Result<()> {
        match fs::remove_file(path).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("daybook-session-{tag}-{}", std::process::id()))
            .join("session.json")
    }

    #[test]
    fn identifier_rules() {
        assert!(Session::is_valid_identifier("user_2abcXYZ"));
        assert!(Session::is_valid_identifier("ann-marie"));
        assert!(!Session::is_valid_identifier("ab"));
        assert!(!Session::is_valid_identifier("has space"));
        assert!(!Session::is_valid_identifier("émile"));
        assert!(!Session::is_valid_identifier(&"x".repeat(65)));
    }

    #[test]
    fn label_falls_back_to_identifier() {
        let session = Session::new("user_1".into(), "  ".into());
        assert_eq!(session.label(), "user_1");
        let named = Session::new("user_1".into(), "Robin".into());
        assert_eq!(named.label(), "Robin");
    }

    #[tokio::test]
    async fn saved_session_survives_reload_and_delete() {
        let path = temp_session_path("reload");
        let session = Session::new("user_42".into(), "Sam".into());
        session.save(&path).await.unwrap();

        assert_eq!(Session::load(&path).await, Some(session));

        Session::delete(&path).await.unwrap();
        assert_eq!(Session::load(&path).await, None);
    }

    #[tokio::test]
    async fn missing_file_is_no_session_and_deletes_cleanly() {
        let path = temp_session_path("missing");
        assert_eq!(Session::load(&path).await, None);
        Session::delete(&path).await.unwrap();
    }

    #[tokio::test]
    async fn tampered_identifier_is_rejected() {
        let path = temp_session_path("tampered");
        let session = Session::new("no spaces allowed".into(), String::new());
        session.save(&path).await.unwrap();

        assert_eq!(Session::load(&path).await, None);
        Session::delete(&path).await.unwrap();
    }
}
