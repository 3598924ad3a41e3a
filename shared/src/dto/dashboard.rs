use serde::{Deserialize, Serialize};

/// Headline dashboard figures. The main backend serves these from
/// `/dashboard/stats`; the dashboard hook also derives the same shape
/// client-side from a transaction sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_transactions: u64,
    pub fraud_detected: u64,
    pub prevented_losses: f64,
    pub detection_rate: f64,
}
