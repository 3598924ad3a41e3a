//! View-ready record shapes derived from raw backend records.
//!
//! Projections are pure and total: every fallback is applied here so the
//! presentation layer never sees a missing field. Nothing in this module is
//! persisted; records are re-derived from the raw data on every fetch.

pub mod transactions;
