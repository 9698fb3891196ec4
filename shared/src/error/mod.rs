//! Unified error system for the mall back office
//!
//! - [`ErrorCode`]: standardized numeric codes
//! - [`ErrorCategory`]: classification by code range
//! - [`AppError`]: error carrying a code, a message and optional details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Store catalog errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::store_not_found("ST042");
//! assert_eq!(err.code, ErrorCode::StoreNotFound);
//! assert_eq!(err.message, "Store ST042 not found");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
