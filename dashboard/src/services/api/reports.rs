//! # Report Endpoints
//!
//! Report listing, generation, download, and deletion.

use reqwest::Method;

use super::client::{ApiClient, Service};
use crate::config::{endpoints, messages};
use crate::core::error::Result;
use shared::dto::reports::{GenerateReportRequest, Report, ReportDownload};
use shared::ApiResponse;

/// List generated reports.
pub async fn list(client: &ApiClient) -> Result<ApiResponse<Vec<Report>>> {
    client
        .request(Method::GET, Service::Main, endpoints::REPORTS_LIST, None)
        .await
}

/// Kick off report generation.
pub async fn generate(
    client: &ApiClient,
    request: &GenerateReportRequest,
) -> Result<ApiResponse<Report>> {
    let response: ApiResponse<Report> = client
        .request(
            Method::POST,
            Service::Main,
            endpoints::REPORTS_GENERATE,
            Some(serde_json::to_value(request).unwrap_or_default()),
        )
        .await?;
    if response.success {
        tracing::info!(report_type = %request.report_type, "{}", messages::REPORT_GENERATED);
    }
    Ok(response)
}

/// Fetch the download descriptor for one report.
pub async fn download(client: &ApiClient, id: &str) -> Result<ApiResponse<ReportDownload>> {
    let path = endpoints::fill(endpoints::REPORTS_DOWNLOAD, "id", id);
    client.request(Method::GET, Service::Main, &path, None).await
}

/// Delete one report.
pub async fn delete(client: &ApiClient, id: &str) -> Result<ApiResponse<serde_json::Value>> {
    let path = endpoints::fill(endpoints::REPORTS_DELETE, "id", id);
    client
        .request(Method::DELETE, Service::Main, &path, None)
        .await
}
