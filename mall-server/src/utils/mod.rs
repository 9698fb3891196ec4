//! 工具模块
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`ApiResponse`] - API 响应结构 (from shared::response)
//! - 日志

pub mod logger;

pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};
