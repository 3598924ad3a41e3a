//! # Session Store
//!
//! Persistent key-value store for the current session: bearer token, refresh
//! token, cached user profile, and cached settings. The on-disk form is a
//! single JSON document keyed by the names in [`crate::config::storage`], so
//! a session survives process restarts on the same machine.
//!
//! The store never fails its callers: when no backing file is configured, or
//! the file cannot be read or written, it degrades to memory-only operation
//! and logs a warning. Reads on a missing or corrupt file start from an
//! empty session.

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::storage;
use shared::{AuthSession, User};

/// Key-value session store, optionally backed by a JSON file.
pub struct SessionStore {
    path: Option<PathBuf>,
    entries: RwLock<Map<String, Value>>,
}

impl SessionStore {
    /// Open a store backed by `path`, loading any persisted session.
    /// Pass `None` for a memory-only store.
    pub fn new(path: Option<PathBuf>) -> Self {
        let entries = path
            .as_deref()
            .and_then(|p| match fs::read_to_string(p) {
                Ok(text) => match serde_json::from_str::<Map<String, Value>>(&text) {
                    Ok(map) => Some(map),
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Ignoring corrupt session file");
                        None
                    }
                },
                // A missing file is the normal first-run case.
                Err(_) => None,
            })
            .unwrap_or_default();

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Open a store at the configured session file path.
    pub fn from_config() -> Self {
        Self::new(crate::config::config().session_file.clone())
    }

    /// Current bearer token, if a non-empty one is stored.
    pub fn token(&self) -> Option<String> {
        self.get_string(storage::AUTH_TOKEN)
            .filter(|t| !t.is_empty())
    }

    /// Current refresh token, if any.
    pub fn refresh_token(&self) -> Option<String> {
        self.get_string(storage::REFRESH_TOKEN)
            .filter(|t| !t.is_empty())
    }

    /// Cached profile of the signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        let entries = self.entries.read();
        let value = entries.get(storage::USER_DATA)?.clone();
        drop(entries);
        serde_json::from_value(value).ok()
    }

    /// Persist a freshly issued session.
    pub fn set_session(&self, session: &AuthSession) {
        {
            let mut entries = self.entries.write();
            entries.insert(
                storage::AUTH_TOKEN.to_string(),
                Value::String(session.token.clone()),
            );
            match &session.refresh_token {
                Some(token) => {
                    entries.insert(
                        storage::REFRESH_TOKEN.to_string(),
                        Value::String(token.clone()),
                    );
                }
                None => {
                    entries.remove(storage::REFRESH_TOKEN);
                }
            }
            if let Ok(user) = serde_json::to_value(&session.user) {
                entries.insert(storage::USER_DATA.to_string(), user);
            }
        }
        self.persist();
    }

    /// Drop the stored session. Cached settings are kept.
    pub fn clear_session(&self) {
        {
            let mut entries = self.entries.write();
            entries.remove(storage::AUTH_TOKEN);
            entries.remove(storage::REFRESH_TOKEN);
            entries.remove(storage::USER_DATA);
        }
        self.persist();
    }

    /// Cached settings document, if any.
    pub fn settings(&self) -> Option<Value> {
        self.entries.read().get(storage::SETTINGS).cloned()
    }

    /// Cache a settings document.
    pub fn set_settings(&self, settings: Value) {
        self.entries
            .write()
            .insert(storage::SETTINGS.to_string(), settings);
        self.persist();
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Best-effort write-through. Failures are logged, never raised.
    fn persist(&self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let text = {
            let entries = self.entries.read();
            serde_json::to_string_pretty(&*entries).unwrap_or_else(|_| "{}".to_string())
        };
        if let Err(e) = fs::write(path, text) {
            warn!(path = %path.display(), error = %e, "Failed to persist session");
        } else {
            debug!(path = %path.display(), "Session persisted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> AuthSession {
        AuthSession {
            token: "jwt-token".to_string(),
            refresh_token: Some("refresh-token".to_string()),
            user: User {
                id: "u-1".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                role: None,
                created_at: None,
            },
        }
    }

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!("fraudwatch-session-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_roundtrip_through_file() {
        let path = temp_store_path();
        let store = SessionStore::new(Some(path.clone()));
        store.set_session(&sample_session());

        // A second store over the same file sees the persisted session.
        let reopened = SessionStore::new(Some(path.clone()));
        assert_eq!(reopened.token().as_deref(), Some("jwt-token"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("refresh-token"));
        assert_eq!(reopened.current_user().unwrap().first_name, "Ada");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_clear_session_keeps_settings() {
        let store = SessionStore::new(None);
        store.set_session(&sample_session());
        store.set_settings(serde_json::json!({"theme": "dark"}));

        store.clear_session();
        assert!(store.token().is_none());
        assert!(store.current_user().is_none());
        assert_eq!(store.settings(), Some(serde_json::json!({"theme": "dark"})));
    }

    #[test]
    fn test_memory_only_store_never_errors() {
        let store = SessionStore::new(None);
        assert!(store.token().is_none());
        store.set_session(&sample_session());
        assert_eq!(store.token().as_deref(), Some("jwt-token"));
        store.clear_session();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let path = temp_store_path();
        fs::write(&path, "not json at all").unwrap();
        let store = SessionStore::new(Some(path.clone()));
        assert!(store.token().is_none());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_empty_token_treated_as_absent() {
        let store = SessionStore::new(None);
        store
            .entries
            .write()
            .insert(storage::AUTH_TOKEN.to_string(), Value::String(String::new()));
        assert!(store.token().is_none());
    }
}
