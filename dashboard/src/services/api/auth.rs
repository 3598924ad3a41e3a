//! # Authentication Endpoints
//!
//! Login, registration, logout, token refresh, and profile retrieval against
//! the main backend.

use reqwest::Method;
use serde_json::json;

use super::client::{ApiClient, Service};
use crate::config::endpoints;
use crate::core::error::Result;
use shared::{ApiResponse, AuthSession, LoginRequest, RegisterRequest, User};

/// Login with email and password.
#[tracing::instrument(skip(client, credentials), fields(email = %credentials.email))]
pub async fn login(
    client: &ApiClient,
    credentials: LoginRequest,
) -> Result<ApiResponse<AuthSession>> {
    tracing::info!("Attempting login");
    client
        .request(
            Method::POST,
            Service::Main,
            endpoints::AUTH_LOGIN,
            Some(serde_json::to_value(&credentials).unwrap_or_default()),
        )
        .await
}

/// Register a new user.
#[tracing::instrument(skip(client, data), fields(email = %data.email))]
pub async fn register(
    client: &ApiClient,
    data: RegisterRequest,
) -> Result<ApiResponse<AuthSession>> {
    tracing::info!("Registering user");
    client
        .request(
            Method::POST,
            Service::Main,
            endpoints::AUTH_REGISTER,
            Some(serde_json::to_value(&data).unwrap_or_default()),
        )
        .await
}

/// Invalidate the current session server-side.
pub async fn logout(client: &ApiClient) -> Result<ApiResponse<serde_json::Value>> {
    client
        .request(Method::POST, Service::Main, endpoints::AUTH_LOGOUT, None)
        .await
}

/// Exchange a refresh token for a new session.
pub async fn refresh(
    client: &ApiClient,
    refresh_token: &str,
) -> Result<ApiResponse<AuthSession>> {
    client
        .request(
            Method::POST,
            Service::Main,
            endpoints::AUTH_REFRESH,
            Some(json!({ "refreshToken": refresh_token })),
        )
        .await
}

/// Fetch the authenticated user's profile.
pub async fn profile(client: &ApiClient) -> Result<ApiResponse<User>> {
    client
        .request(Method::GET, Service::Main, endpoints::AUTH_PROFILE, None)
        .await
}
