//! Shared types for the mall back office
//!
//! Domain models, static catalog tables, the unified error type and the
//! JSON response envelope used by `mall-server` and its clients.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::ApiResponse;
