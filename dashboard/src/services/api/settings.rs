//! # Settings Endpoints
//!
//! Security settings retrieval and update.

use reqwest::Method;

use super::client::{ApiClient, Service};
use crate::config::endpoints;
use crate::core::error::Result;
use shared::dto::settings::SecuritySettings;
use shared::ApiResponse;

/// Current security settings.
pub async fn get_security(client: &ApiClient) -> Result<ApiResponse<SecuritySettings>> {
    client
        .request(Method::GET, Service::Main, endpoints::SETTINGS_SECURITY, None)
        .await
}

/// Replace the security settings.
pub async fn update_security(
    client: &ApiClient,
    settings: &SecuritySettings,
) -> Result<ApiResponse<SecuritySettings>> {
    client
        .request(
            Method::PUT,
            Service::Main,
            endpoints::SETTINGS_SECURITY,
            Some(serde_json::to_value(settings).unwrap_or_default()),
        )
        .await
}
