//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::accounts::AccountStatisticsData;
use shared::dto::alerts::{AlertFilters, SecurityAlert};
use shared::dto::monitoring::{RiskAssessment, SystemStatus};
use shared::dto::settings::SecuritySettings;
use shared::dto::transactions::{Transaction, TransactionFilters};
use shared::{ApiResponse, AuthSession, LoginRequest, PaginatedResponse, RegisterRequest};

use crate::core::error::Result;

/// Operations the app layer and data hooks consume.
///
/// [`crate::services::api::ApiClient`] implements this by delegating to the
/// facade modules; tests substitute stub implementations so hooks and the
/// auth context run without a network.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Login with email and password.
    async fn login(&self, credentials: LoginRequest) -> Result<ApiResponse<AuthSession>>;

    /// Register a new user.
    async fn register(&self, data: RegisterRequest) -> Result<ApiResponse<AuthSession>>;

    /// Invalidate the current session server-side.
    async fn logout(&self) -> Result<ApiResponse<serde_json::Value>>;

    /// Aggregate account statistics.
    async fn get_account_statistics(&self) -> Result<ApiResponse<AccountStatisticsData>>;

    /// One page of transactions matching the filters.
    async fn get_transactions(
        &self,
        filters: &TransactionFilters,
        page: u32,
        limit: u32,
    ) -> Result<PaginatedResponse<Transaction>>;

    /// One page of security alerts matching the filters.
    async fn get_alerts(
        &self,
        filters: &AlertFilters,
        page: u32,
        limit: u32,
    ) -> Result<PaginatedResponse<SecurityAlert>>;

    /// Current security settings.
    async fn get_security_settings(&self) -> Result<ApiResponse<SecuritySettings>>;

    /// Replace the security settings.
    async fn update_security_settings(
        &self,
        settings: &SecuritySettings,
    ) -> Result<ApiResponse<SecuritySettings>>;

    /// Platform health snapshot.
    async fn get_system_status(&self) -> Result<ApiResponse<SystemStatus>>;

    /// Platform-wide risk assessment.
    async fn get_risk_assessment(&self) -> Result<ApiResponse<RiskAssessment>>;
}
