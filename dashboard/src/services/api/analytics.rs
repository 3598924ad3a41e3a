//! # Analytics Endpoints
//!
//! Aggregated prevented-losses and fraud-trend series.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::{ApiClient, Service};
use crate::config::endpoints;
use crate::core::error::Result;
use shared::ApiResponse;

/// Aggregate prevented-losses figure over a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreventedLosses {
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub period_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub period_end: Option<DateTime<Utc>>,
}

/// One point of the fraud-trend series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FraudTrendPoint {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub flagged: Option<u64>,
    #[serde(default)]
    pub blocked: Option<u64>,
}

/// Aggregate prevented-losses figure.
pub async fn prevented_losses(client: &ApiClient) -> Result<ApiResponse<PreventedLosses>> {
    client
        .request(
            Method::GET,
            Service::Main,
            endpoints::ANALYTICS_PREVENTED_LOSSES,
            None,
        )
        .await
}

/// Fraud-trend series for charting.
pub async fn fraud_trends(client: &ApiClient) -> Result<ApiResponse<Vec<FraudTrendPoint>>> {
    client
        .request(
            Method::GET,
            Service::Main,
            endpoints::ANALYTICS_FRAUD_TRENDS,
            None,
        )
        .await
}
