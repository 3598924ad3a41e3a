use serde::{Deserialize, Serialize};

/// Applicant features submitted for credit scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditScoreRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub monthly_income: f64,
    pub monthly_debt: f64,
    #[serde(default)]
    pub account_age_months: Option<u32>,
}

/// Credit score computed by the inference service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditScore {
    pub score: u32,
    #[serde(default)]
    pub band: Option<String>,
    #[serde(default)]
    pub factors: Vec<String>,
}

/// Loan-eligibility assessment request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanEligibilityRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub requested_amount: f64,
    pub term_months: u32,
    pub monthly_income: f64,
}

/// Loan-eligibility verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanEligibility {
    pub eligible: bool,
    #[serde(default)]
    pub max_amount: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
}
