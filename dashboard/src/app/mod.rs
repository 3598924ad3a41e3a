//! Application state: screen navigation and the per-process auth context.

pub mod auth;
pub mod state;

pub use auth::AuthContext;
pub use state::{AuthState, Screen};
