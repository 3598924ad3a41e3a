//! # Data Hooks
//!
//! Per-view data-fetching units. Each hook owns its state behind
//! `Arc<RwLock<_>>`, fetches through an injected [`crate::core::ApiService`],
//! transforms raw records into view-ready shapes, and exposes
//! `snapshot()` / `refetch()` to the presentation layer.
//!
//! Conventions shared by every hook:
//!
//! - `refetch()` flips `loading` on and clears `error` before fetching.
//! - Fetches that span several facade calls join them; derived state is only
//!   computed once every call has settled.
//! - The new state is published in a single write, so overlapping refetches
//!   settle to exactly one resolution, never a merge.
//! - A thrown error lands in `error` as its display string; an
//!   application-level `success = false` response is surfaced the same way.

pub mod dashboard;
pub mod monitoring;
pub mod settings;
pub mod transactions;

pub use dashboard::DashboardHook;
pub use monitoring::MonitoringHook;
pub use settings::SecuritySettingsHook;
pub use transactions::TransactionsHook;

#[cfg(test)]
pub(crate) mod test_stubs {
    //! Configurable ApiService stub shared by the hook tests.

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use crate::core::error::{ApiError, Result};
    use crate::core::service::ApiService;
    use shared::dto::accounts::AccountStatisticsData;
    use shared::dto::alerts::{AlertFilters, SecurityAlert};
    use shared::dto::monitoring::{RiskAssessment, SystemStatus};
    use shared::dto::settings::SecuritySettings;
    use shared::dto::transactions::{Transaction, TransactionFilters};
    use shared::{ApiResponse, AuthSession, LoginRequest, PaginatedResponse, RegisterRequest};

    pub(crate) fn stub_error() -> ApiError {
        ApiError::Network("Network error: connection refused".to_string())
    }

    /// Stub backend. Unset responses yield a network error; transaction
    /// responses are consumed in order, repeating the last one.
    #[derive(Default)]
    pub(crate) struct StubApi {
        pub stats_response: Option<ApiResponse<AccountStatisticsData>>,
        pub transaction_responses: Mutex<Vec<PaginatedResponse<Transaction>>>,
        pub alerts_response: Option<PaginatedResponse<SecurityAlert>>,
        pub settings_response: Option<ApiResponse<SecuritySettings>>,
        pub system_response: Option<ApiResponse<SystemStatus>>,
        pub risk_response: Option<ApiResponse<RiskAssessment>>,
    }

    #[async_trait]
    impl ApiService for StubApi {
        async fn login(&self, _credentials: LoginRequest) -> Result<ApiResponse<AuthSession>> {
            Err(stub_error())
        }

        async fn register(&self, _data: RegisterRequest) -> Result<ApiResponse<AuthSession>> {
            Err(stub_error())
        }

        async fn logout(&self) -> Result<ApiResponse<serde_json::Value>> {
            Err(stub_error())
        }

        async fn get_account_statistics(&self) -> Result<ApiResponse<AccountStatisticsData>> {
            self.stats_response.clone().ok_or_else(stub_error)
        }

        async fn get_transactions(
            &self,
            _filters: &TransactionFilters,
            _page: u32,
            _limit: u32,
        ) -> Result<PaginatedResponse<Transaction>> {
            let mut responses = self.transaction_responses.lock();
            match responses.len() {
                0 => Err(stub_error()),
                1 => Ok(responses[0].clone()),
                _ => Ok(responses.remove(0)),
            }
        }

        async fn get_alerts(
            &self,
            _filters: &AlertFilters,
            _page: u32,
            _limit: u32,
        ) -> Result<PaginatedResponse<SecurityAlert>> {
            self.alerts_response.clone().ok_or_else(stub_error)
        }

        async fn get_security_settings(&self) -> Result<ApiResponse<SecuritySettings>> {
            self.settings_response.clone().ok_or_else(stub_error)
        }

        async fn update_security_settings(
            &self,
            settings: &SecuritySettings,
        ) -> Result<ApiResponse<SecuritySettings>> {
            Ok(ApiResponse {
                success: true,
                data: Some(settings.clone()),
                message: None,
            })
        }

        async fn get_system_status(&self) -> Result<ApiResponse<SystemStatus>> {
            self.system_response.clone().ok_or_else(stub_error)
        }

        async fn get_risk_assessment(&self) -> Result<ApiResponse<RiskAssessment>> {
            self.risk_response.clone().ok_or_else(stub_error)
        }
    }
}
