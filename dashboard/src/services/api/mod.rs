//! # Backend API Client Module
//!
//! HTTP client for the two FraudWatch backends: the main business-logic
//! service and the inference service.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient struct, headers, retry, envelope parsing
//! ├── auth.rs         - Authentication endpoints (login, register, logout, refresh, profile)
//! ├── accounts.rs     - Account list and statistics
//! ├── transactions.rs - Transaction list/details/export
//! ├── alerts.rs       - Alert list/details/status/dismiss
//! ├── reports.rs      - Report list/generate/download/delete
//! ├── settings.rs     - Security settings get/update
//! ├── monitoring.rs   - System status, risk assessment, location activity
//! ├── analytics.rs    - Prevented losses, fraud trends
//! ├── dashboard.rs    - Backend-computed dashboard stats
//! ├── fraud.rs        - Fraud analysis (inference service)
//! └── credit.rs       - Credit scoring (inference service)
//! ```

pub mod accounts;
pub mod alerts;
pub mod analytics;
pub mod auth;
pub mod client;
pub mod credit;
pub mod dashboard;
pub mod fraud;
pub mod monitoring;
pub mod reports;
pub mod settings;
pub mod transactions;

pub use client::{ApiClient, Service};
