use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend transaction status. The wire value is SCREAMING_SNAKE_CASE; any
/// value this client does not recognize lands on [`TransactionStatus::Unknown`]
/// so one odd record never fails a whole page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Blocked,
    Rejected,
    Flagged,
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    /// True for the statuses that represent money the platform stopped.
    pub fn is_prevented(self) -> bool {
        matches!(self, TransactionStatus::Blocked | TransactionStatus::Rejected)
    }
}

/// Counterparty reference embedded in a transaction record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionParty {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Raw transaction record as the main backend returns it. Most fields are
/// optional on the wire; the view layer supplies display fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub sender: Option<TransactionParty>,
    #[serde(default)]
    pub receiver: Option<TransactionParty>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fraud score in the 0–100 range, attached by the inference service.
    #[serde(default)]
    pub fraud_score: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Flat filter set for transaction list queries. Every field is optional;
/// set fields are serialized as `key=value` querystring parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilters {
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub min_amount: Option<f64>,
    #[serde(default)]
    pub max_amount: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

impl TransactionFilters {
    /// Querystring pairs for the set fields, in declaration order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.wire_name().to_string()));
        }
        if let Some(kind) = &self.kind {
            pairs.push(("type", kind.clone()));
        }
        if let Some(min) = self.min_amount {
            pairs.push(("minAmount", min.to_string()));
        }
        if let Some(max) = self.max_amount {
            pairs.push(("maxAmount", max.to_string()));
        }
        if let Some(start) = &self.start_date {
            pairs.push(("startDate", start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("endDate", end.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

impl TransactionStatus {
    /// The SCREAMING_SNAKE_CASE name the backend expects in querystrings.
    pub fn wire_name(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Blocked => "BLOCKED",
            TransactionStatus::Rejected => "REJECTED",
            TransactionStatus::Flagged => "FLAGGED",
            TransactionStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Receipt returned by the transaction export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportReceipt {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_deserializes_full_record() {
        let json = r#"{
            "_id": "tx-1",
            "amount": 1250.5,
            "sender": {"firstName": "Maya", "lastName": "Singh"},
            "location": "Lagos, NG",
            "channel": "via Mobile App",
            "type": "Transfer",
            "status": "FLAGGED",
            "createdAt": "2024-03-01T12:00:00Z",
            "fraudScore": 82.0
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id.as_deref(), Some("tx-1"));
        assert_eq!(tx.status, Some(TransactionStatus::Flagged));
        assert_eq!(tx.fraud_score, Some(82.0));
        assert_eq!(tx.sender.unwrap().first_name.as_deref(), Some("Maya"));
    }

    #[test]
    fn test_unrecognized_status_maps_to_unknown() {
        let json = r#"{"amount": 10.0, "status": "QUARANTINED"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.status, Some(TransactionStatus::Unknown));
    }

    #[test]
    fn test_sparse_record_uses_defaults() {
        let tx: Transaction = serde_json::from_str("{}").unwrap();
        assert_eq!(tx.amount, 0.0);
        assert!(tx.sender.is_none());
        assert!(tx.status.is_none());
        assert!(tx.created_at.is_none());
    }

    #[test]
    fn test_filters_to_pairs_skips_unset_fields() {
        let filters = TransactionFilters {
            status: Some(TransactionStatus::Blocked),
            min_amount: Some(100.0),
            ..Default::default()
        };
        assert_eq!(
            filters.to_pairs(),
            vec![
                ("status", "BLOCKED".to_string()),
                ("minAmount", "100".to_string()),
            ]
        );
        assert!(TransactionFilters::default().to_pairs().is_empty());
    }

    #[test]
    fn test_prevented_statuses() {
        assert!(TransactionStatus::Blocked.is_prevented());
        assert!(TransactionStatus::Rejected.is_prevented());
        assert!(!TransactionStatus::Flagged.is_prevented());
        assert!(!TransactionStatus::Completed.is_prevented());
    }
}
