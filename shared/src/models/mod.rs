//! Data models
//!
//! Shared between mall-server and the dashboard (via API).

pub mod catalog;
pub mod store;

// Re-exports
pub use store::*;
