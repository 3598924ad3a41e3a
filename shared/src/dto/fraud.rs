use serde::{Deserialize, Serialize};

/// Transaction features submitted to the inference service for scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FraudAnalysisRequest {
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Scoring verdict from the inference service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FraudAnalysis {
    /// Fraud score in the 0–100 range.
    pub fraud_score: f64,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Longitudinal risk profile for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub user_id: String,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub flagged_transactions: Option<u64>,
}
