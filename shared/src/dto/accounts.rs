use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account record owned by the main backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Aggregate figures reported by the account statistics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatistics {
    #[serde(default)]
    pub total_transactions: Option<u64>,
    #[serde(default)]
    pub total_accounts: Option<u64>,
    #[serde(default)]
    pub total_balance: Option<f64>,
    #[serde(default)]
    pub active_accounts: Option<u64>,
}

/// Envelope the statistics endpoint wraps its figures in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountStatisticsData {
    #[serde(default)]
    pub statistics: AccountStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_envelope() {
        let json = r#"{"statistics": {"totalTransactions": 4821, "activeAccounts": 310}}"#;
        let data: AccountStatisticsData = serde_json::from_str(json).unwrap();
        assert_eq!(data.statistics.total_transactions, Some(4821));
        assert_eq!(data.statistics.active_accounts, Some(310));
        assert!(data.statistics.total_balance.is_none());
    }
}
