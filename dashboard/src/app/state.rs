//! # Application State Types
//!
//! Screen navigation and the authentication state held by the
//! [`crate::app::auth::AuthContext`].

use shared::User;

/// Dashboard screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Sign-in / registration screen
    SignIn,
    /// Overview with stat cards and the live transaction feed
    Overview,
    /// Full transaction feed with risk annotations
    Transactions,
    /// Security alert queue
    Alerts,
    /// Generated reports
    Reports,
    /// System health and risk monitoring
    Monitoring,
    /// Security settings
    Settings,
}

impl Screen {
    /// All screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::SignIn,
            Screen::Overview,
            Screen::Transactions,
            Screen::Alerts,
            Screen::Reports,
            Screen::Monitoring,
            Screen::Settings,
        ]
    }

    /// Screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::SignIn => "Sign In",
            Screen::Overview => "Fraud Monitoring Overview",
            Screen::Transactions => "Real-Time Transaction Feed",
            Screen::Alerts => "Security Alerts",
            Screen::Reports => "Reports",
            Screen::Monitoring => "System Monitoring",
            Screen::Settings => "Security Settings",
        }
    }

    /// Whether a screen requires an authenticated session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::SignIn)
    }
}

/// Authentication state held per process (per tab in the original product).
#[derive(Debug, Clone)]
pub struct AuthState {
    /// Profile of the signed-in user, if any.
    pub user: Option<User>,
    /// True until the initial session read completes; protected screens
    /// block rendering while this is set.
    pub loading: bool,
    /// Currently active screen.
    pub screen: Screen,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            screen: Screen::Overview,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_sign_in_is_public() {
        for screen in Screen::all() {
            assert_eq!(screen.requires_auth(), *screen != Screen::SignIn);
        }
    }
}
