//! # Client Configuration
//!
//! Static configuration for the dashboard client: backend base URLs resolved
//! from the environment once at startup, endpoint path templates, persisted
//! storage key names, and canonical user-facing message strings.

use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Resolved client configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Main backend service base URL (auth, accounts, transactions, alerts).
    pub main_backend_url: String,
    /// Inference service base URL (fraud scoring, credit scoring).
    pub ai_service_url: String,
    /// Per-request timeout applied to the HTTP client.
    pub timeout: Duration,
    /// Transport-failure retry attempts for idempotent requests.
    pub retry_attempts: u32,
    /// Base delay between retries; doubles per attempt.
    pub retry_delay: Duration,
    /// Path of the persisted session file. `None` keeps the session
    /// in memory only.
    pub session_file: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let main_backend_url = env::var("MAIN_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api/v1".to_string());

        let ai_service_url = env::var("AI_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string());

        let timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let retry_attempts = env::var("RETRY_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let retry_delay_ms = env::var("RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let session_file = match env::var("SESSION_FILE") {
            Ok(path) if path.is_empty() => None,
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => Some(PathBuf::from("./fraudwatch-session.json")),
        };

        Self {
            main_backend_url,
            ai_service_url,
            timeout: Duration::from_secs(timeout_secs),
            retry_attempts,
            retry_delay: Duration::from_millis(retry_delay_ms),
            session_file,
        }
    }
}

static CONFIG: Lazy<ApiConfig> = Lazy::new(ApiConfig::from_env);

/// Process-wide configuration, resolved from the environment on first use.
pub fn config() -> &'static ApiConfig {
    &CONFIG
}

/// Endpoint path templates. Templates containing `:param` placeholders are
/// substituted by the facades via [`endpoints::fill`].
pub mod endpoints {
    // Authentication (main backend)
    pub const AUTH_LOGIN: &str = "/auth/login";
    pub const AUTH_REGISTER: &str = "/auth/register";
    pub const AUTH_LOGOUT: &str = "/auth/logout";
    pub const AUTH_REFRESH: &str = "/auth/refresh";
    pub const AUTH_PROFILE: &str = "/auth/profile";

    // Dashboard
    pub const DASHBOARD_STATS: &str = "/dashboard/stats";

    // Accounts
    pub const ACCOUNTS_LIST: &str = "/accounts";
    pub const ACCOUNTS_STATISTICS: &str = "/accounts/statistics";

    // Transactions
    pub const TRANSACTIONS_LIST: &str = "/transactions";
    pub const TRANSACTIONS_DETAILS: &str = "/transactions/:id";
    pub const TRANSACTIONS_EXPORT: &str = "/transactions/export";

    // Alerts
    pub const ALERTS_LIST: &str = "/alerts";
    pub const ALERTS_DETAILS: &str = "/alerts/:id";
    pub const ALERTS_UPDATE_STATUS: &str = "/alerts/:id/status";
    pub const ALERTS_DISMISS: &str = "/alerts/:id/dismiss";

    // Reports
    pub const REPORTS_LIST: &str = "/reports";
    pub const REPORTS_GENERATE: &str = "/reports/generate";
    pub const REPORTS_DOWNLOAD: &str = "/reports/:id/download";
    pub const REPORTS_DELETE: &str = "/reports/:id";

    // Settings
    pub const SETTINGS_SECURITY: &str = "/settings/security";

    // Monitoring
    pub const MONITORING_SYSTEM_STATUS: &str = "/monitoring/system";
    pub const MONITORING_RISK_ASSESSMENT: &str = "/monitoring/risk";
    pub const MONITORING_LOCATION_ACTIVITY: &str = "/monitoring/locations";

    // Analytics
    pub const ANALYTICS_PREVENTED_LOSSES: &str = "/analytics/prevented-losses";
    pub const ANALYTICS_FRAUD_TRENDS: &str = "/analytics/fraud-trends";

    // Fraud detection (inference service)
    pub const FRAUD_ANALYZE: &str = "/fraud/analyze";
    pub const FRAUD_RISK_PROFILE: &str = "/fraud/risk-profile/:userId";

    // Credit scoring (inference service)
    pub const CREDIT_SCORE: &str = "/v1/credit/score";
    pub const CREDIT_ELIGIBILITY: &str = "/v1/credit/eligibility";

    /// Substitute a `:param` placeholder with a percent-encoded value.
    pub fn fill(template: &str, param: &str, value: &str) -> String {
        template.replace(
            &format!(":{}", param),
            urlencoding::encode(value).as_ref(),
        )
    }
}

/// Persisted session storage key names.
pub mod storage {
    pub const AUTH_TOKEN: &str = "fraud_detection_token";
    pub const REFRESH_TOKEN: &str = "fraud_detection_refresh_token";
    pub const USER_DATA: &str = "fraud_detection_user";
    pub const SETTINGS: &str = "fraud_detection_settings";
}

/// Canonical user-facing message strings.
pub mod messages {
    pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
    pub const UNAUTHORIZED: &str = "Session expired. Please login again.";
    pub const FORBIDDEN: &str = "You do not have permission to perform this action.";
    pub const NOT_FOUND: &str = "The requested resource was not found.";
    pub const SERVER_ERROR: &str = "Server error. Please try again later.";
    pub const VALIDATION_ERROR: &str = "Please check your input and try again.";

    pub const LOGIN_SUCCESS: &str = "Successfully logged in";
    pub const LOGOUT_SUCCESS: &str = "Successfully logged out";
    pub const SETTINGS_UPDATED: &str = "Settings updated successfully";
    pub const REPORT_GENERATED: &str = "Report generated successfully";
    pub const ALERT_DISMISSED: &str = "Alert dismissed successfully";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_substitutes_placeholder() {
        assert_eq!(
            endpoints::fill(endpoints::TRANSACTIONS_DETAILS, "id", "tx-42"),
            "/transactions/tx-42"
        );
        assert_eq!(
            endpoints::fill(endpoints::FRAUD_RISK_PROFILE, "userId", "u 1"),
            "/fraud/risk-profile/u%201"
        );
    }

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys = [
            storage::AUTH_TOKEN,
            storage::REFRESH_TOKEN,
            storage::USER_DATA,
            storage::SETTINGS,
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
