//! # API Client
//!
//! Shared HTTP client for both FraudWatch backends.
//!
//! The client resolves the target base URL (main backend or inference
//! service), attaches the default header set (JSON content type plus a
//! bearer `Authorization` header whenever a token is present in the session
//! store at request-build time), sends the request, and parses the body as
//! JSON unconditionally. Non-success statuses become an [`ApiError::Http`]
//! carrying the server-supplied message (or the configured fallback); a 2xx
//! envelope with `success = false` is returned as-is for the caller to check.
//!
//! The configured timeout is applied on the underlying `reqwest` client, and
//! transport failures on GET requests are retried with a doubling delay up
//! to the configured attempt count. The client never touches the session
//! store; unauthorized responses surface to the caller like any other HTTP
//! failure.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{config, messages, ApiConfig};
use crate::core::error::{ApiError, Result};
use crate::session::SessionStore;
use shared::{ApiResponse, PaginatedResponse};

/// Which backend a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Main business-logic backend (auth, accounts, transactions, alerts).
    Main,
    /// Inference service (fraud scoring, credit scoring).
    Inference,
}

/// HTTP client for communicating with the FraudWatch backends.
///
/// Maintains a connection pool shared across all facade calls. The session
/// store is consulted on every request so header construction always sees
/// the current token.
pub struct ApiClient {
    pub(crate) http: Client,
    config: ApiConfig,
    store: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a client over the process-wide configuration.
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self::with_config(config().clone(), store)
    }

    /// Create a client with explicit configuration (used by tests).
    pub fn with_config(config: ApiConfig, store: Arc<SessionStore>) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { http, config, store }
    }

    /// Base URL for the selected backend.
    pub(crate) fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Main => &self.config.main_backend_url,
            Service::Inference => &self.config.ai_service_url,
        }
    }

    /// Default header set: JSON content type, plus `Authorization: Bearer`
    /// when (and only when) a non-empty token is stored. A missing token is
    /// not an error; the header is simply omitted.
    pub(crate) fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.store.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => {
                    tracing::warn!("Stored token is not a valid header value; sending anonymous request");
                }
            }
        }

        headers
    }

    /// Issue a request and parse the standard envelope.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        service: Service,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse<T>> {
        self.send(method, service, endpoint, body, None).await
    }

    /// Like [`ApiClient::request`], with caller headers merged over the
    /// default set (caller wins on conflicts).
    pub async fn request_with_headers<T: DeserializeOwned>(
        &self,
        method: Method,
        service: Service,
        endpoint: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> Result<ApiResponse<T>> {
        self.send(method, service, endpoint, body, Some(headers)).await
    }

    /// Issue a GET request and parse the paginated list envelope.
    pub async fn request_list<T: DeserializeOwned>(
        &self,
        service: Service,
        endpoint: &str,
    ) -> Result<PaginatedResponse<T>> {
        self.send(Method::GET, service, endpoint, None, None).await
    }

    /// Send with transport-failure retry for idempotent requests.
    async fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        service: Service,
        endpoint: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<R> {
        let attempts = if method == Method::GET {
            self.config.retry_attempts.max(1)
        } else {
            1
        };
        let mut delay = self.config.retry_delay;

        for attempt in 1..=attempts {
            match self
                .try_send(
                    method.clone(),
                    service,
                    endpoint,
                    body.as_ref(),
                    extra_headers.as_ref(),
                )
                .await
            {
                Ok(parsed) => return Ok(parsed),
                Err(e) if e.is_network() && attempt < attempts => {
                    tracing::warn!(
                        endpoint = %endpoint,
                        attempt = attempt,
                        max_attempts = attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Transport failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => return Err(e),
            }
        }

        // Unreachable: the final attempt always returns above.
        Err(ApiError::Network(messages::NETWORK_ERROR.to_string()))
    }

    /// One request/response cycle.
    async fn try_send<R: DeserializeOwned>(
        &self,
        method: Method,
        service: Service,
        endpoint: &str,
        body: Option<&Value>,
        extra_headers: Option<&HeaderMap>,
    ) -> Result<R> {
        let url = format!("{}{}", self.base_url(service), endpoint);
        let request_id = uuid::Uuid::new_v4();
        let start = Instant::now();

        let mut headers = self.build_headers();
        if let Some(extra) = extra_headers {
            for (name, value) in extra {
                headers.insert(name.clone(), value.clone());
            }
        }

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                url = %url,
                error = %e,
                "API request failed before a response arrived"
            );
            ApiError::Network(format!("Network error: {}", e))
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;
        let duration = start.elapsed();

        // The backends answer JSON on every path, including errors.
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::Parse(format!("Failed to parse response: {}", e)))?;

        if status.is_success() {
            tracing::debug!(
                request_id = %request_id,
                method = %method,
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis() as u64,
                "API request completed"
            );
            serde_json::from_value::<R>(value)
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {}", e)))
        } else {
            let message = failure_message(&value);
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                url = %url,
                status = status.as_u16(),
                duration_ms = duration.as_millis() as u64,
                message = %message,
                "API request rejected"
            );
            Err(ApiError::Http {
                status: status.as_u16(),
                message,
            })
        }
    }
}

// Implement ApiService for ApiClient by delegating to the facade modules.
#[async_trait::async_trait]
impl crate::core::service::ApiService for ApiClient {
    async fn login(
        &self,
        credentials: shared::LoginRequest,
    ) -> Result<ApiResponse<shared::AuthSession>> {
        crate::services::api::auth::login(self, credentials).await
    }

    async fn register(
        &self,
        data: shared::RegisterRequest,
    ) -> Result<ApiResponse<shared::AuthSession>> {
        crate::services::api::auth::register(self, data).await
    }

    async fn logout(&self) -> Result<ApiResponse<Value>> {
        crate::services::api::auth::logout(self).await
    }

    async fn get_account_statistics(
        &self,
    ) -> Result<ApiResponse<shared::dto::accounts::AccountStatisticsData>> {
        crate::services::api::accounts::statistics(self).await
    }

    async fn get_transactions(
        &self,
        filters: &shared::dto::transactions::TransactionFilters,
        page: u32,
        limit: u32,
    ) -> Result<PaginatedResponse<shared::dto::transactions::Transaction>> {
        crate::services::api::transactions::list(self, filters, page, limit).await
    }

    async fn get_alerts(
        &self,
        filters: &shared::dto::alerts::AlertFilters,
        page: u32,
        limit: u32,
    ) -> Result<PaginatedResponse<shared::dto::alerts::SecurityAlert>> {
        crate::services::api::alerts::list(self, filters, page, limit).await
    }

    async fn get_security_settings(
        &self,
    ) -> Result<ApiResponse<shared::dto::settings::SecuritySettings>> {
        crate::services::api::settings::get_security(self).await
    }

    async fn update_security_settings(
        &self,
        settings: &shared::dto::settings::SecuritySettings,
    ) -> Result<ApiResponse<shared::dto::settings::SecuritySettings>> {
        crate::services::api::settings::update_security(self, settings).await
    }

    async fn get_system_status(
        &self,
    ) -> Result<ApiResponse<shared::dto::monitoring::SystemStatus>> {
        crate::services::api::monitoring::system_status(self).await
    }

    async fn get_risk_assessment(
        &self,
    ) -> Result<ApiResponse<shared::dto::monitoring::RiskAssessment>> {
        crate::services::api::monitoring::risk_assessment(self).await
    }
}

/// Error message for a failed response: the body's `message` field when
/// present, else the configured server-error string.
pub(crate) fn failure_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or(messages::SERVER_ERROR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AuthSession, User};

    fn client_with_store(store: SessionStore) -> ApiClient {
        let config = ApiConfig {
            main_backend_url: "http://localhost:5000/api/v1".to_string(),
            ai_service_url: "http://localhost:8000/api".to_string(),
            timeout: std::time::Duration::from_secs(30),
            retry_attempts: 3,
            retry_delay: std::time::Duration::from_millis(1000),
            session_file: None,
        };
        ApiClient::with_config(config, Arc::new(store))
    }

    fn session(token: &str) -> AuthSession {
        AuthSession {
            token: token.to_string(),
            refresh_token: None,
            user: User {
                id: "u-1".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                role: None,
                created_at: None,
            },
        }
    }

    #[test]
    fn test_headers_include_bearer_when_token_present() {
        let store = SessionStore::new(None);
        store.set_session(&session("jwt-token"));
        let client = client_with_store(store);

        let headers = client.build_headers();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer jwt-token"
        );
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap().to_str().unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_headers_omit_bearer_when_no_token() {
        let client = client_with_store(SessionStore::new(None));
        let headers = client.build_headers();
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_headers_omit_bearer_for_empty_token() {
        let store = SessionStore::new(None);
        store.set_session(&session(""));
        let client = client_with_store(store);
        assert!(client.build_headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_failure_message_prefers_body_message() {
        let body = serde_json::json!({"success": false, "message": "Account locked"});
        assert_eq!(failure_message(&body), "Account locked");
    }

    #[test]
    fn test_failure_message_falls_back_to_server_error() {
        let body = serde_json::json!({"success": false});
        assert_eq!(failure_message(&body), messages::SERVER_ERROR);
        assert_eq!(failure_message(&serde_json::json!("oops")), messages::SERVER_ERROR);
    }

    #[test]
    fn test_base_url_selection() {
        let client = client_with_store(SessionStore::new(None));
        assert_eq!(client.base_url(Service::Main), "http://localhost:5000/api/v1");
        assert_eq!(client.base_url(Service::Inference), "http://localhost:8000/api");
    }
}
