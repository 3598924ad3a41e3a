//! # Transaction View Projections
//!
//! Two view shapes are derived from a raw [`Transaction`]:
//!
//! - [`FeedItem`]: the compact overview feed entry (short relative age,
//!   lowercase status label).
//! - [`TransactionRow`]: the transactions-page row (spelled-out relative
//!   age, reviewer-facing status, risk percentage).
//!
//! All functions take `now` explicitly so projections are deterministic.

use chrono::{DateTime, Utc};

use shared::dto::transactions::{Transaction, TransactionStatus};
use shared::utils::{format_amount, format_percentage};

/// Compact feed entry for the overview screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Option<String>,
    pub name: String,
    pub amount: String,
    pub location: String,
    pub app: String,
    pub kind: String,
    pub status: String,
    pub time: String,
}

/// Row for the transactions page, including the risk annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub id: Option<String>,
    pub name: String,
    pub amount: String,
    pub location: String,
    pub app: String,
    pub kind: String,
    pub status: String,
    pub time: String,
    /// "N%" when the fraud score exceeds 50, else `None`.
    pub risk: Option<String>,
}

/// Sender display name; `unknown` is the caller's fallback label.
fn sender_name(tx: &Transaction, unknown: &str) -> String {
    match tx.sender.as_ref().and_then(|s| s.first_name.as_deref()) {
        Some(first) => match tx.sender.as_ref().and_then(|s| s.last_name.as_deref()) {
            Some(last) => format!("{} {}", first, last),
            None => first.to_string(),
        },
        None => unknown.to_string(),
    }
}

/// Short relative age: "now", "5m", "3h", "2d".
pub fn relative_age_short(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();
    if minutes < 1 {
        return "now".to_string();
    }
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}

/// Spelled-out relative age: "now", "5 min ago", "3 hours ago", "2 days ago".
pub fn relative_age_long(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();
    if minutes < 1 {
        return "now".to_string();
    }
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" });
    }
    let days = hours / 24;
    format!("{} day{} ago", days, if days > 1 { "s" } else { "" })
}

/// Reviewer-facing status label. Total over every status the backend can
/// send; anything unrecognized (or absent) reads as "Suspicious".
pub fn map_status(status: Option<TransactionStatus>) -> &'static str {
    match status {
        Some(TransactionStatus::Completed) => "Approved",
        Some(TransactionStatus::Pending) => "Pending",
        Some(TransactionStatus::Blocked) => "Blocked",
        Some(TransactionStatus::Rejected) => "Blocked",
        Some(TransactionStatus::Flagged) => "Suspicious",
        Some(TransactionStatus::Unknown) | None => "Suspicious",
    }
}

/// Lowercase feed label; absent or unrecognized statuses read as "pending".
fn feed_status(status: Option<TransactionStatus>) -> &'static str {
    match status {
        Some(TransactionStatus::Completed) => "completed",
        Some(TransactionStatus::Pending) => "pending",
        Some(TransactionStatus::Blocked) => "blocked",
        Some(TransactionStatus::Rejected) => "rejected",
        Some(TransactionStatus::Flagged) => "flagged",
        Some(TransactionStatus::Unknown) | None => "pending",
    }
}

impl FeedItem {
    /// Project a raw transaction into a feed entry.
    pub fn project(tx: &Transaction, now: DateTime<Utc>) -> Self {
        Self {
            id: tx.id.clone(),
            name: sender_name(tx, "Unknown"),
            amount: format_amount(tx.amount),
            location: tx.location.clone().unwrap_or_else(|| "Unknown".to_string()),
            app: tx.channel.clone().unwrap_or_else(|| "via Web App".to_string()),
            kind: tx.kind.clone().unwrap_or_else(|| "Transfer".to_string()),
            status: feed_status(tx.status).to_string(),
            time: tx
                .created_at
                .map(|created| relative_age_short(created, now))
                .unwrap_or_else(|| "now".to_string()),
        }
    }
}

impl TransactionRow {
    /// Project a raw transaction into a transactions-page row.
    pub fn project(tx: &Transaction, now: DateTime<Utc>) -> Self {
        Self {
            id: tx.id.clone(),
            name: sender_name(tx, "Unknown User"),
            amount: format_amount(tx.amount),
            location: tx.location.clone().unwrap_or_else(|| "Unknown".to_string()),
            app: tx.channel.clone().unwrap_or_else(|| "via Web App".to_string()),
            kind: tx.kind.clone().unwrap_or_else(|| "Transfer".to_string()),
            status: map_status(tx.status).to_string(),
            time: tx
                .created_at
                .map(|created| relative_age_long(created, now))
                .unwrap_or_else(|| "now".to_string()),
            risk: tx
                .fraud_score
                .filter(|score| *score > 50.0)
                .map(format_percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shared::dto::transactions::TransactionParty;

    fn base_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn tx() -> Transaction {
        serde_json::from_str("{}").unwrap()
    }

    #[test]
    fn test_relative_age_short() {
        let now = base_time();
        assert_eq!(relative_age_short(now - Duration::seconds(30), now), "now");
        assert_eq!(relative_age_short(now - Duration::minutes(5), now), "5m");
        assert_eq!(relative_age_short(now - Duration::hours(3), now), "3h");
        assert_eq!(relative_age_short(now - Duration::days(2), now), "2d");
    }

    #[test]
    fn test_relative_age_long() {
        let now = base_time();
        assert_eq!(relative_age_long(now - Duration::seconds(30), now), "now");
        assert_eq!(relative_age_long(now - Duration::minutes(5), now), "5 min ago");
        assert_eq!(relative_age_long(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_age_long(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(relative_age_long(now - Duration::days(2), now), "2 days ago");
        assert_eq!(relative_age_long(now - Duration::days(1), now), "1 day ago");
    }

    #[test]
    fn test_status_mapping_is_total() {
        assert_eq!(map_status(Some(TransactionStatus::Completed)), "Approved");
        assert_eq!(map_status(Some(TransactionStatus::Pending)), "Pending");
        assert_eq!(map_status(Some(TransactionStatus::Blocked)), "Blocked");
        assert_eq!(map_status(Some(TransactionStatus::Rejected)), "Blocked");
        assert_eq!(map_status(Some(TransactionStatus::Flagged)), "Suspicious");
        assert_eq!(map_status(Some(TransactionStatus::Unknown)), "Suspicious");
        assert_eq!(map_status(None), "Suspicious");
    }

    #[test]
    fn test_feed_item_fallbacks() {
        let item = FeedItem::project(&tx(), base_time());
        assert_eq!(item.name, "Unknown");
        assert_eq!(item.amount, "$0");
        assert_eq!(item.location, "Unknown");
        assert_eq!(item.app, "via Web App");
        assert_eq!(item.kind, "Transfer");
        assert_eq!(item.status, "pending");
        assert_eq!(item.time, "now");
    }

    #[test]
    fn test_row_projects_full_record() {
        let mut record = tx();
        record.id = Some("tx-1".to_string());
        record.amount = 1250.5;
        record.sender = Some(TransactionParty {
            id: None,
            first_name: Some("Maya".to_string()),
            last_name: Some("Singh".to_string()),
            email: None,
        });
        record.location = Some("Lagos, NG".to_string());
        record.channel = Some("via Mobile App".to_string());
        record.kind = Some("Withdrawal".to_string());
        record.status = Some(TransactionStatus::Flagged);
        record.created_at = Some(base_time() - Duration::minutes(5));
        record.fraud_score = Some(82.0);

        let row = TransactionRow::project(&record, base_time());
        assert_eq!(row.name, "Maya Singh");
        assert_eq!(row.amount, "$1,250.50");
        assert_eq!(row.status, "Suspicious");
        assert_eq!(row.time, "5 min ago");
        assert_eq!(row.risk.as_deref(), Some("82%"));
    }

    #[test]
    fn test_risk_requires_score_above_fifty() {
        let mut record = tx();
        record.fraud_score = Some(50.0);
        assert!(TransactionRow::project(&record, base_time()).risk.is_none());

        record.fraud_score = Some(50.5);
        assert_eq!(
            TransactionRow::project(&record, base_time()).risk.as_deref(),
            Some("50.5%")
        );

        record.fraud_score = None;
        assert!(TransactionRow::project(&record, base_time()).risk.is_none());
    }

    #[test]
    fn test_sender_with_first_name_only() {
        let mut record = tx();
        record.sender = Some(TransactionParty {
            id: None,
            first_name: Some("Maya".to_string()),
            last_name: None,
            email: None,
        });
        assert_eq!(FeedItem::project(&record, base_time()).name, "Maya");
    }
}
