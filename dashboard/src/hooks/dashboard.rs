//! # Dashboard Aggregate Hook
//!
//! Feeds the overview screen: stat cards plus the recent-transaction feed.
//! One fetch cycle issues the account-statistics and first-page transaction
//! calls together and derives the headline figures from the sample once both
//! have settled.

use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::warn;

use crate::core::service::ApiService;
use crate::views::transactions::FeedItem;
use shared::dto::dashboard::DashboardStats;
use shared::dto::transactions::{Transaction, TransactionFilters};

/// Transactions fetched per cycle; also the feed length cap.
const SAMPLE_LIMIT: u32 = 10;

/// Fraud scores above this count as detected fraud.
const FRAUD_SCORE_THRESHOLD: f64 = 70.0;

/// Detection rate shown when no transactions have been sampled yet.
const BASELINE_DETECTION_RATE: f64 = 99.7;

const FETCH_FAILED: &str = "Failed to fetch dashboard data";

/// State exposed to the overview screen.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_transactions: Vec<FeedItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            stats: DashboardStats::default(),
            recent_transactions: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Derive the headline figures from a transaction sample.
///
/// The backend-reported total wins when it is a positive figure; otherwise
/// the sample length stands in. An empty sample reports the baseline
/// detection rate instead of dividing by zero.
pub fn derive_stats(reported_total: Option<u64>, transactions: &[Transaction]) -> DashboardStats {
    let fraud_detected = transactions
        .iter()
        .filter(|tx| tx.fraud_score.is_some_and(|score| score > FRAUD_SCORE_THRESHOLD))
        .count() as u64;

    let prevented_losses = transactions
        .iter()
        .filter(|tx| tx.status.is_some_and(|status| status.is_prevented()))
        .map(|tx| tx.amount)
        .sum();

    let detection_rate = if transactions.is_empty() {
        BASELINE_DETECTION_RATE
    } else {
        (fraud_detected as f64 / transactions.len() as f64) * 100.0
    };

    DashboardStats {
        total_transactions: reported_total
            .filter(|total| *total > 0)
            .unwrap_or(transactions.len() as u64),
        fraud_detected,
        prevented_losses,
        detection_rate,
    }
}

/// Dashboard aggregate fetch unit.
#[derive(Clone)]
pub struct DashboardHook {
    api: Arc<dyn ApiService>,
    state: Arc<RwLock<DashboardData>>,
}

impl DashboardHook {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(DashboardData::default())),
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> DashboardData {
        self.state.read().clone()
    }

    /// Run one fetch cycle and publish the result in a single state write.
    pub async fn refetch(&self) {
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let filters = TransactionFilters::default();
        let (stats_result, transactions_result) = tokio::join!(
            self.api.get_account_statistics(),
            self.api
                .get_transactions(&filters, 1, SAMPLE_LIMIT),
        );

        let next = match (stats_result, transactions_result) {
            (Ok(stats_response), Ok(tx_response))
                if stats_response.success && tx_response.success =>
            {
                let reported_total = stats_response
                    .data
                    .and_then(|data| data.statistics.total_transactions);
                let stats = derive_stats(reported_total, &tx_response.data);

                let now = Utc::now();
                let recent_transactions = tx_response
                    .data
                    .iter()
                    .take(SAMPLE_LIMIT as usize)
                    .map(|tx| FeedItem::project(tx, now))
                    .collect();

                DashboardData {
                    stats,
                    recent_transactions,
                    loading: false,
                    error: None,
                }
            }
            (Ok(stats_response), Ok(tx_response)) => {
                // 2xx but success=false on at least one response.
                let message = stats_response
                    .message
                    .or(tx_response.message)
                    .unwrap_or_else(|| FETCH_FAILED.to_string());
                warn!(message = %message, "Dashboard fetch reported an application-level failure");
                DashboardData {
                    loading: false,
                    error: Some(message),
                    ..self.snapshot()
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Dashboard fetch failed");
                DashboardData {
                    loading: false,
                    error: Some(e.to_string()),
                    ..self.snapshot()
                }
            }
        };

        *self.state.write() = next;
    }
}
