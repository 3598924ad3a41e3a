//! # Credit Scoring Endpoints
//!
//! Calls into the inference service for credit scores and loan eligibility.

use reqwest::Method;

use super::client::{ApiClient, Service};
use crate::config::endpoints;
use crate::core::error::Result;
use shared::dto::credit::{
    CreditScore, CreditScoreRequest, LoanEligibility, LoanEligibilityRequest,
};
use shared::ApiResponse;

/// Compute a credit score for the supplied applicant features.
pub async fn score(
    client: &ApiClient,
    request: &CreditScoreRequest,
) -> Result<ApiResponse<CreditScore>> {
    client
        .request(
            Method::POST,
            Service::Inference,
            endpoints::CREDIT_SCORE,
            Some(serde_json::to_value(request).unwrap_or_default()),
        )
        .await
}

/// Assess loan eligibility.
pub async fn eligibility(
    client: &ApiClient,
    request: &LoanEligibilityRequest,
) -> Result<ApiResponse<LoanEligibility>> {
    client
        .request(
            Method::POST,
            Service::Inference,
            endpoints::CREDIT_ELIGIBILITY,
            Some(serde_json::to_value(request).unwrap_or_default()),
        )
        .await
}
