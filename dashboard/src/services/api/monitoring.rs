//! # Monitoring Endpoints
//!
//! Platform health, risk assessment, and geographic activity.

use reqwest::Method;

use super::client::{ApiClient, Service};
use crate::config::endpoints;
use crate::core::error::Result;
use shared::dto::monitoring::{LocationActivity, RiskAssessment, SystemStatus};
use shared::ApiResponse;

/// Health snapshot of the monitored services.
pub async fn system_status(client: &ApiClient) -> Result<ApiResponse<SystemStatus>> {
    client
        .request(
            Method::GET,
            Service::Main,
            endpoints::MONITORING_SYSTEM_STATUS,
            None,
        )
        .await
}

/// Platform-wide risk assessment.
pub async fn risk_assessment(client: &ApiClient) -> Result<ApiResponse<RiskAssessment>> {
    client
        .request(
            Method::GET,
            Service::Main,
            endpoints::MONITORING_RISK_ASSESSMENT,
            None,
        )
        .await
}

/// Per-location activity for the geographic widget.
pub async fn location_activity(client: &ApiClient) -> Result<ApiResponse<Vec<LocationActivity>>> {
    client
        .request(
            Method::GET,
            Service::Main,
            endpoints::MONITORING_LOCATION_ACTIVITY,
            None,
        )
        .await
}
