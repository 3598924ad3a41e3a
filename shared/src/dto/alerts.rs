use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert severity as reported by the main backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

/// Security alert record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAlert {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Option<AlertSeverity>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Flat filter set for alert list queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertFilters {
    #[serde(default)]
    pub severity: Option<AlertSeverity>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl AlertFilters {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(severity) = self.severity {
            let name = match severity {
                AlertSeverity::Low => "LOW",
                AlertSeverity::Medium => "MEDIUM",
                AlertSeverity::High => "HIGH",
                AlertSeverity::Critical => "CRITICAL",
                AlertSeverity::Unknown => "UNKNOWN",
            };
            pairs.push(("severity", name.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

/// Body for the alert status-update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertStatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_deserializes() {
        let json = r#"{
            "_id": "al-9",
            "title": "Velocity spike",
            "severity": "HIGH",
            "status": "OPEN",
            "createdAt": "2024-03-01T09:30:00Z"
        }"#;
        let alert: SecurityAlert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.severity, Some(AlertSeverity::High));
        assert_eq!(alert.status.as_deref(), Some("OPEN"));
    }

    #[test]
    fn test_filter_pairs() {
        let filters = AlertFilters {
            severity: Some(AlertSeverity::Critical),
            status: Some("OPEN".into()),
            search: None,
        };
        assert_eq!(
            filters.to_pairs(),
            vec![
                ("severity", "CRITICAL".to_string()),
                ("status", "OPEN".to_string()),
            ]
        );
    }
}
