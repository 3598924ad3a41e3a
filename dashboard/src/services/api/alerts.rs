//! # Alert Endpoints
//!
//! Security alert listing, details, status updates, and dismissal.

use reqwest::Method;

use super::client::{ApiClient, Service};
use crate::config::{endpoints, messages};
use crate::core::error::Result;
use crate::utils::query;
use shared::dto::alerts::{AlertFilters, AlertStatusUpdate, SecurityAlert};
use shared::{ApiResponse, PaginatedResponse};

/// One page of alerts matching the filters.
pub async fn list(
    client: &ApiClient,
    filters: &AlertFilters,
    page: u32,
    limit: u32,
) -> Result<PaginatedResponse<SecurityAlert>> {
    let path = query::paged_path(endpoints::ALERTS_LIST, page, limit, &filters.to_pairs());
    client.request_list(Service::Main, &path).await
}

/// Details for one alert.
pub async fn details(client: &ApiClient, id: &str) -> Result<ApiResponse<SecurityAlert>> {
    let path = endpoints::fill(endpoints::ALERTS_DETAILS, "id", id);
    client.request(Method::GET, Service::Main, &path, None).await
}

/// Move an alert to a new status.
pub async fn update_status(
    client: &ApiClient,
    id: &str,
    status: &str,
) -> Result<ApiResponse<SecurityAlert>> {
    let path = endpoints::fill(endpoints::ALERTS_UPDATE_STATUS, "id", id);
    let body = AlertStatusUpdate {
        status: status.to_string(),
    };
    client
        .request(
            Method::PUT,
            Service::Main,
            &path,
            Some(serde_json::to_value(&body).unwrap_or_default()),
        )
        .await
}

/// Dismiss an alert.
pub async fn dismiss(client: &ApiClient, id: &str) -> Result<ApiResponse<serde_json::Value>> {
    let path = endpoints::fill(endpoints::ALERTS_DISMISS, "id", id);
    let response = client
        .request(Method::POST, Service::Main, &path, None)
        .await?;
    if response.success {
        tracing::info!(alert_id = %id, "{}", messages::ALERT_DISMISSED);
    }
    Ok(response)
}
