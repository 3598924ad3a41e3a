//! # Account Endpoints
//!
//! Account listing and aggregate statistics.

use reqwest::Method;

use super::client::{ApiClient, Service};
use crate::config::endpoints;
use crate::core::error::Result;
use shared::dto::accounts::{Account, AccountStatisticsData};
use shared::ApiResponse;

/// List the user's accounts.
pub async fn list(client: &ApiClient) -> Result<ApiResponse<Vec<Account>>> {
    client
        .request(Method::GET, Service::Main, endpoints::ACCOUNTS_LIST, None)
        .await
}

/// Aggregate account statistics (feeds the dashboard stat cards).
pub async fn statistics(client: &ApiClient) -> Result<ApiResponse<AccountStatisticsData>> {
    client
        .request(
            Method::GET,
            Service::Main,
            endpoints::ACCOUNTS_STATISTICS,
            None,
        )
        .await
}
