//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard client and the two
//! FraudWatch backends: the main business-logic service (auth, accounts,
//! transactions, alerts, reports, settings, monitoring) and the inference
//! service (fraud analysis, credit scoring). All DTOs use JSON serialization
//! via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::common`]**: Response envelopes (`ApiResponse`, `PaginatedResponse`)
//!   - **[`dto::auth`]**: Authentication and user profile DTOs
//!   - **[`dto::transactions`]**: Transaction records and list filters
//!   - **[`dto::alerts`]**: Security alert records and list filters
//!   - **[`dto::accounts`]**: Account records and aggregate statistics
//!   - **[`dto::reports`]**: Report records and generation requests
//!   - **[`dto::settings`]**: Security settings
//!   - **[`dto::monitoring`]**: System status, risk assessment, location activity
//!   - **[`dto::dashboard`]**: Dashboard statistics
//!   - **[`dto::fraud`]**: Fraud-analysis requests/responses (inference service)
//!   - **[`dto::credit`]**: Credit-scoring requests/responses (inference service)
//! - **[`utils`]**: Shared formatting helpers
//!
//! ## Wire Format
//!
//! Both backends speak camelCase JSON, so record types carry
//! `#[serde(rename_all = "camelCase")]`. Fields the backends may omit are
//! `Option` with `#[serde(default)]`; a missing field deserializes to `None`
//! instead of failing the whole payload.

pub mod dto;
pub mod utils;

// Re-export the envelope and auth types at the crate root; every consumer
// of this library touches them.
pub use dto::auth::{AuthSession, LoginRequest, RegisterRequest, User};
pub use dto::common::{ApiResponse, PageInfo, PaginatedResponse};
