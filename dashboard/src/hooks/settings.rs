//! # Security Settings Hook
//!
//! Loads and updates security settings, mirroring the fetched document into
//! the session store's cached-settings key so the settings screen can render
//! instantly on the next visit.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::messages;
use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;
use crate::session::SessionStore;
use shared::dto::settings::SecuritySettings;

const FETCH_FAILED: &str = "Failed to fetch security settings";

/// State exposed to the settings screen.
#[derive(Debug, Clone)]
pub struct SettingsData {
    pub settings: Option<SecuritySettings>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            settings: None,
            loading: true,
            error: None,
        }
    }
}

/// Security settings fetch/update unit.
#[derive(Clone)]
pub struct SecuritySettingsHook {
    api: Arc<dyn ApiService>,
    store: Arc<SessionStore>,
    state: Arc<RwLock<SettingsData>>,
}

impl SecuritySettingsHook {
    pub fn new(api: Arc<dyn ApiService>, store: Arc<SessionStore>) -> Self {
        Self {
            api,
            store,
            state: Arc::new(RwLock::new(SettingsData::default())),
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> SettingsData {
        self.state.read().clone()
    }

    /// Fetch the settings and cache them locally.
    pub async fn refetch(&self) {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let next = match self.api.get_security_settings().await {
            Ok(response) if response.success => {
                self.cache(response.data.as_ref());
                SettingsData {
                    settings: response.data,
                    loading: false,
                    error: None,
                }
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| FETCH_FAILED.to_string());
                warn!(message = %message, "Settings fetch reported an application-level failure");
                SettingsData {
                    loading: false,
                    error: Some(message),
                    ..self.snapshot()
                }
            }
            Err(e) => {
                warn!(error = %e, "Settings fetch failed");
                SettingsData {
                    loading: false,
                    error: Some(e.to_string()),
                    ..self.snapshot()
                }
            }
        };

        *self.state.write() = next;
    }

    /// Push updated settings; the accepted document replaces local state and
    /// the cached copy.
    pub async fn update(&self, settings: &SecuritySettings) -> Result<SecuritySettings> {
        let response = self.api.update_security_settings(settings).await?;
        match response.into_result() {
            Ok(accepted) => {
                // The backend may echo a normalized document; fall back to
                // what we sent.
                let accepted = accepted.unwrap_or_else(|| settings.clone());
                self.cache(Some(&accepted));
                {
                    let mut state = self.state.write();
                    state.settings = Some(accepted.clone());
                    state.error = None;
                }
                info!("{}", messages::SETTINGS_UPDATED);
                Ok(accepted)
            }
            Err(message) => Err(ApiError::Application(
                message.unwrap_or_else(|| messages::SERVER_ERROR.to_string()),
            )),
        }
    }

    fn cache(&self, settings: Option<&SecuritySettings>) {
        if let Some(settings) = settings {
            if let Ok(value) = serde_json::to_value(settings) {
                self.store.set_settings(value);
            }
        }
    }
}
