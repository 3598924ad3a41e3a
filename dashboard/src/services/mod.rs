//! External service clients.

pub mod api;

pub use api::{ApiClient, Service};
