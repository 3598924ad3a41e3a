//! # Dashboard Endpoints
//!
//! Backend-computed headline statistics.

use reqwest::Method;

use super::client::{ApiClient, Service};
use crate::config::endpoints;
use crate::core::error::Result;
use shared::dto::dashboard::DashboardStats;
use shared::ApiResponse;

/// Backend-computed dashboard statistics.
pub async fn stats(client: &ApiClient) -> Result<ApiResponse<DashboardStats>> {
    client
        .request(Method::GET, Service::Main, endpoints::DASHBOARD_STATS, None)
        .await
}
