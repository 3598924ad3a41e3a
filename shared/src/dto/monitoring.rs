use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health snapshot of the monitored platform services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub uptime_seconds: Option<u64>,
    #[serde(default)]
    pub services: Vec<ServiceHealth>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-service health entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
}

/// Platform-wide risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-location activity entry for the geographic widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationActivity {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub transaction_count: Option<u64>,
    #[serde(default)]
    pub flagged_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_status_deserializes() {
        let json = r#"{
            "status": "operational",
            "uptimeSeconds": 86400,
            "services": [{"name": "api", "status": "up", "latencyMs": 12.5}]
        }"#;
        let status: SystemStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status.as_deref(), Some("operational"));
        assert_eq!(status.services.len(), 1);
        assert_eq!(status.services[0].latency_ms, Some(12.5));
    }
}
