//! # Monitoring Hook
//!
//! Feeds the system-health and risk widgets. One cycle joins the system
//! status and risk assessment calls; both must report success before state
//! is updated.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::warn;

use crate::core::service::ApiService;
use shared::dto::monitoring::{RiskAssessment, SystemStatus};

const FETCH_FAILED: &str = "Failed to fetch monitoring data";

/// State exposed to the monitoring screen.
#[derive(Debug, Clone)]
pub struct MonitoringData {
    pub system: Option<SystemStatus>,
    pub risk: Option<RiskAssessment>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for MonitoringData {
    fn default() -> Self {
        Self {
            system: None,
            risk: None,
            loading: true,
            error: None,
        }
    }
}

/// Monitoring fetch unit.
#[derive(Clone)]
pub struct MonitoringHook {
    api: Arc<dyn ApiService>,
    state: Arc<RwLock<MonitoringData>>,
}

impl MonitoringHook {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(MonitoringData::default())),
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> MonitoringData {
        self.state.read().clone()
    }

    /// Run one fetch cycle and publish the result in a single state write.
    pub async fn refetch(&self) {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let (system_result, risk_result) = tokio::join!(
            self.api.get_system_status(),
            self.api.get_risk_assessment(),
        );

        let next = match (system_result, risk_result) {
            (Ok(system_response), Ok(risk_response))
                if system_response.success && risk_response.success =>
            {
                MonitoringData {
                    system: system_response.data,
                    risk: risk_response.data,
                    loading: false,
                    error: None,
                }
            }
            (Ok(system_response), Ok(risk_response)) => {
                let message = system_response
                    .message
                    .or(risk_response.message)
                    .unwrap_or_else(|| FETCH_FAILED.to_string());
                warn!(message = %message, "Monitoring fetch reported an application-level failure");
                MonitoringData {
                    loading: false,
                    error: Some(message),
                    ..self.snapshot()
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Monitoring fetch failed");
                MonitoringData {
                    loading: false,
                    error: Some(e.to_string()),
                    ..self.snapshot()
                }
            }
        };

        *self.state.write() = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::test_stubs::StubApi;
    use shared::ApiResponse;

    fn system() -> ApiResponse<SystemStatus> {
        ApiResponse {
            success: true,
            data: Some(SystemStatus {
                status: Some("operational".to_string()),
                uptime_seconds: Some(86_400),
                services: vec![],
                updated_at: None,
            }),
            message: None,
        }
    }

    fn risk() -> ApiResponse<RiskAssessment> {
        ApiResponse {
            success: true,
            data: Some(RiskAssessment {
                level: Some("elevated".to_string()),
                score: Some(61.0),
                factors: vec!["velocity".to_string()],
                updated_at: None,
            }),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_refetch_requires_both_calls_to_succeed() {
        let stub = StubApi {
            system_response: Some(system()),
            risk_response: None,
            ..Default::default()
        };
        let hook = MonitoringHook::new(Arc::new(stub));
        hook.refetch().await;

        let data = hook.snapshot();
        assert!(data.system.is_none());
        assert!(data.error.is_some());
    }

    #[tokio::test]
    async fn test_refetch_publishes_both_payloads() {
        let stub = StubApi {
            system_response: Some(system()),
            risk_response: Some(risk()),
            ..Default::default()
        };
        let hook = MonitoringHook::new(Arc::new(stub));
        hook.refetch().await;

        let data = hook.snapshot();
        assert!(!data.loading);
        assert_eq!(data.system.unwrap().status.as_deref(), Some("operational"));
        assert_eq!(data.risk.unwrap().level.as_deref(), Some("elevated"));
    }
}
