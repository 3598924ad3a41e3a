//! # FraudWatch Dashboard Client - Library Root
//!
//! Data-access layer for the FraudWatch fraud-monitoring dashboard. The
//! crate talks to two HTTP backends, the main business-logic service and
//! the ML inference service, and exposes view-ready state to whatever
//! presentation layer sits on top.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                  │
//! ├──────────────────────────────────────────────────────┤
//! │  hooks     - per-view fetch units (data/loading/err) │
//! │  app       - auth context + screen navigation        │
//! │  services  - HTTP client + per-domain facades        │
//! │  session   - persisted token/user/settings store     │
//! │  views     - pure raw-record → view-record mappers   │
//! │  config    - base URLs, endpoints, keys, messages    │
//! └──────────────────────────────────────────────────────┘
//!        │ HTTP                         │ HTTP
//!        ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Main backend   │          │  Inference service      │
//! │  (business API) │          │  (fraud/credit scoring) │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Request flow
//!
//! Presentation → hook → `ApiService` facade → `ApiClient` → session store
//! (for the bearer header) + config (for URLs/templates) → network. The
//! client parses every body as JSON and raises one [`core::ApiError`] type
//! for transport, HTTP, and parse failures alike; hooks convert it into
//! their `error` string.
//!
//! ### State management
//!
//! Hook and auth state live in `Arc<parking_lot::RwLock<_>>`. Locks are held
//! only to read or swap a snapshot, never across an await point. Each fetch
//! cycle publishes its whole result in a single write, so overlapping
//! refetches settle to exactly one resolution.
//!
//! ### Dependency injection
//!
//! Hooks and the auth context depend on the [`core::ApiService`] trait, not
//! the concrete client, so tests run against stub backends with no network.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod hooks;
pub mod services;
pub mod session;
pub mod utils;
pub mod views;

// Re-export commonly used types for convenience
pub use crate::app::{AuthContext, Screen};
pub use crate::core::{ApiError, ApiService, Result};
pub use crate::services::{ApiClient, Service};
pub use crate::session::SessionStore;
