//! # Fraud Detection Endpoints
//!
//! Calls into the inference service for transaction scoring and per-user
//! risk profiles.

use reqwest::Method;

use super::client::{ApiClient, Service};
use crate::config::endpoints;
use crate::core::error::Result;
use shared::dto::fraud::{FraudAnalysis, FraudAnalysisRequest, RiskProfile};
use shared::ApiResponse;

/// Score one transaction.
#[tracing::instrument(skip(client, request))]
pub async fn analyze(
    client: &ApiClient,
    request: &FraudAnalysisRequest,
) -> Result<ApiResponse<FraudAnalysis>> {
    client
        .request(
            Method::POST,
            Service::Inference,
            endpoints::FRAUD_ANALYZE,
            Some(serde_json::to_value(request).unwrap_or_default()),
        )
        .await
}

/// Longitudinal risk profile for one user.
pub async fn risk_profile(client: &ApiClient, user_id: &str) -> Result<ApiResponse<RiskProfile>> {
    let path = endpoints::fill(endpoints::FRAUD_RISK_PROFILE, "userId", user_id);
    client
        .request(Method::GET, Service::Inference, &path, None)
        .await
}
