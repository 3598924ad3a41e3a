//! # Transactions Page Hook
//!
//! Fetches the first page of the full feed and projects each record into a
//! [`TransactionRow`] with status mapping and risk annotation.

use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::warn;

use crate::core::service::ApiService;
use crate::views::transactions::TransactionRow;
use shared::dto::transactions::TransactionFilters;

const PAGE_LIMIT: u32 = 50;

const FETCH_FAILED: &str = "Failed to fetch transactions";

/// State exposed to the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsData {
    pub transactions: Vec<TransactionRow>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for TransactionsData {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Transactions page fetch unit.
#[derive(Clone)]
pub struct TransactionsHook {
    api: Arc<dyn ApiService>,
    filters: TransactionFilters,
    state: Arc<RwLock<TransactionsData>>,
}

impl TransactionsHook {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self::with_filters(api, TransactionFilters::default())
    }

    pub fn with_filters(api: Arc<dyn ApiService>, filters: TransactionFilters) -> Self {
        Self {
            api,
            filters,
            state: Arc::new(RwLock::new(TransactionsData::default())),
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> TransactionsData {
        self.state.read().clone()
    }

    /// Run one fetch cycle and publish the result in a single state write.
    pub async fn refetch(&self) {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let next = match self.api.get_transactions(&self.filters, 1, PAGE_LIMIT).await {
            Ok(response) if response.success => {
                let now = Utc::now();
                let transactions = response
                    .data
                    .iter()
                    .map(|tx| TransactionRow::project(tx, now))
                    .collect();
                TransactionsData {
                    transactions,
                    loading: false,
                    error: None,
                }
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| FETCH_FAILED.to_string());
                warn!(message = %message, "Transaction fetch reported an application-level failure");
                TransactionsData {
                    loading: false,
                    error: Some(message),
                    ..self.snapshot()
                }
            }
            Err(e) => {
                warn!(error = %e, "Transaction fetch failed");
                TransactionsData {
                    loading: false,
                    error: Some(e.to_string()),
                    ..self.snapshot()
                }
            }
        };

        *self.state.write() = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::test_stubs::StubApi;
    use shared::dto::transactions::{Transaction, TransactionStatus};
    use shared::PaginatedResponse;

    fn flagged_tx() -> Transaction {
        let mut tx: Transaction = serde_json::from_str("{}").unwrap();
        tx.amount = 1250.0;
        tx.status = Some(TransactionStatus::Flagged);
        tx.fraud_score = Some(82.0);
        tx
    }

    #[tokio::test]
    async fn test_refetch_projects_rows() {
        let stub = StubApi::default();
        stub.transaction_responses.lock().push(PaginatedResponse {
            success: true,
            data: vec![flagged_tx()],
            message: None,
            pagination: None,
        });

        let hook = TransactionsHook::new(Arc::new(stub));
        hook.refetch().await;

        let data = hook.snapshot();
        assert!(!data.loading);
        assert!(data.error.is_none());
        assert_eq!(data.transactions.len(), 1);
        let row = &data.transactions[0];
        assert_eq!(row.status, "Suspicious");
        assert_eq!(row.amount, "$1,250");
        assert_eq!(row.risk.as_deref(), Some("82%"));
        assert_eq!(row.name, "Unknown User");
    }

    #[tokio::test]
    async fn test_refetch_surfaces_errors() {
        let hook = TransactionsHook::new(Arc::new(StubApi::default()));
        hook.refetch().await;

        let data = hook.snapshot();
        assert!(!data.loading);
        assert!(data.error.is_some());
        assert!(data.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_refetch_surfaces_application_failure() {
        let stub = StubApi::default();
        stub.transaction_responses.lock().push(PaginatedResponse {
            success: false,
            data: vec![],
            message: None,
            pagination: None,
        });

        let hook = TransactionsHook::new(Arc::new(stub));
        hook.refetch().await;

        let data = hook.snapshot();
        assert_eq!(data.error.as_deref(), Some("Failed to fetch transactions"));
    }
}
