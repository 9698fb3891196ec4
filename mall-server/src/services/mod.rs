//! Services
//!
//! - [`http`] - axum router, middleware stack and in-process dispatch

pub mod http;

pub use self::http::{build_app, build_router};
