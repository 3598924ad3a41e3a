//! # Transaction Endpoints
//!
//! Paginated transaction listing with filters, per-transaction details, and
//! export.

use reqwest::Method;

use super::client::{ApiClient, Service};
use crate::config::endpoints;
use crate::core::error::Result;
use crate::utils::query;
use shared::dto::transactions::{ExportReceipt, Transaction, TransactionFilters};
use shared::{ApiResponse, PaginatedResponse};

/// One page of transactions matching the filters.
#[tracing::instrument(skip(client, filters))]
pub async fn list(
    client: &ApiClient,
    filters: &TransactionFilters,
    page: u32,
    limit: u32,
) -> Result<PaginatedResponse<Transaction>> {
    let path = query::paged_path(endpoints::TRANSACTIONS_LIST, page, limit, &filters.to_pairs());
    client.request_list(Service::Main, &path).await
}

/// Details for one transaction.
pub async fn details(client: &ApiClient, id: &str) -> Result<ApiResponse<Transaction>> {
    let path = endpoints::fill(endpoints::TRANSACTIONS_DETAILS, "id", id);
    client.request(Method::GET, Service::Main, &path, None).await
}

/// Request an export of the transactions matching the filters.
pub async fn export(
    client: &ApiClient,
    filters: &TransactionFilters,
) -> Result<ApiResponse<ExportReceipt>> {
    let pairs = filters.to_pairs();
    let path = if pairs.is_empty() {
        endpoints::TRANSACTIONS_EXPORT.to_string()
    } else {
        format!(
            "{}?{}",
            endpoints::TRANSACTIONS_EXPORT,
            query::encode_pairs(&pairs)
        )
    };
    client.request(Method::GET, Service::Main, &path, None).await
}
