//! # Authentication Context
//!
//! Per-process session holder. Initialized once at startup by reading the
//! session store synchronously: a stored token plus cached user means the
//! session is considered authenticated immediately, with no network
//! round-trip to validate freshness.
//!
//! Logout is an explicit two-step protocol: a best-effort remote logout
//! whose failure is logged and swallowed, followed by an unconditional local
//! teardown (store clear, user reset, navigation to the sign-in screen).
//! The two steps are independently callable so either can be exercised in
//! isolation.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

use crate::app::state::{AuthState, Screen};
use crate::config::messages;
use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;
use crate::session::SessionStore;
use shared::{LoginRequest, RegisterRequest, User};

/// Session holder wired to an [`ApiService`] and a [`SessionStore`].
pub struct AuthContext {
    api: Arc<dyn ApiService>,
    store: Arc<SessionStore>,
    state: Arc<RwLock<AuthState>>,
}

impl AuthContext {
    pub fn new(api: Arc<dyn ApiService>, store: Arc<SessionStore>) -> Self {
        Self {
            api,
            store,
            state: Arc::new(RwLock::new(AuthState::default())),
        }
    }

    /// Read the persisted session. Token + cached user means authenticated;
    /// anything less leaves the context signed out. Completes the initial
    /// loading phase either way.
    pub fn initialize(&self) {
        let token = self.store.token();
        let user = self.store.current_user();

        let mut state = self.state.write();
        if token.is_some() {
            state.user = user;
        }
        state.loading = false;
    }

    /// Snapshot of the current auth state.
    pub fn snapshot(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    /// Login and adopt the returned session.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Application(messages::VALIDATION_ERROR.to_string()));
        }
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(credentials).await?;
        self.adopt(response.into_result())
    }

    /// Register and adopt the returned session.
    pub async fn register(&self, data: RegisterRequest) -> Result<User> {
        if data.first_name.is_empty()
            || data.last_name.is_empty()
            || data.email.is_empty()
            || data.password.is_empty()
        {
            return Err(ApiError::Application(messages::VALIDATION_ERROR.to_string()));
        }
        let response = self.api.register(data).await?;
        self.adopt(response.into_result())
    }

    /// Log out: best-effort remote invalidation, then unconditional local
    /// teardown. The caller always ends up signed out on the sign-in screen.
    pub async fn logout(&self) {
        self.logout_remote().await;
        self.teardown();
    }

    /// Remote half of logout. Errors are logged, never propagated; a dead
    /// backend must not trap the user in a half-authenticated state.
    pub async fn logout_remote(&self) {
        if let Err(e) = self.api.logout().await {
            warn!(error = %e, "Remote logout failed; clearing local session anyway");
        }
    }

    /// Local half of logout: clear the store, drop the user, navigate to
    /// the sign-in screen.
    pub fn teardown(&self) {
        self.store.clear_session();
        let mut state = self.state.write();
        state.user = None;
        state.screen = Screen::SignIn;
        drop(state);
        info!("{}", messages::LOGOUT_SUCCESS);
    }

    /// React to a rejected bearer token: the session is gone server-side,
    /// so drop it locally too.
    pub fn handle_unauthorized(&self) {
        warn!("{}", messages::UNAUTHORIZED);
        self.teardown();
    }

    /// Re-read the cached profile from the store.
    pub fn refresh_user(&self) {
        let user = self.store.current_user();
        self.state.write().user = user;
    }

    /// Navigate to a screen, redirecting unauthenticated visitors away from
    /// protected views. While the initial session read is pending the target
    /// is kept and the consumer blocks rendering on `loading`.
    pub fn navigate(&self, target: Screen) {
        let mut state = self.state.write();
        if target.requires_auth() && !state.loading && !state.is_authenticated() {
            state.screen = Screen::SignIn;
        } else {
            state.screen = target;
        }
    }

    fn adopt(
        &self,
        outcome: std::result::Result<Option<shared::AuthSession>, Option<String>>,
    ) -> Result<User> {
        match outcome {
            Ok(Some(session)) => {
                self.store.set_session(&session);
                self.state.write().user = Some(session.user.clone());
                info!(user_id = %session.user.id, "{}", messages::LOGIN_SUCCESS);
                Ok(session.user)
            }
            Ok(None) => Err(ApiError::Application(messages::SERVER_ERROR.to_string())),
            Err(message) => Err(ApiError::Application(
                message.unwrap_or_else(|| messages::SERVER_ERROR.to_string()),
            )),
        }
    }
}
