//! Store Statistics API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/store-stats/ | GET | 汇总: 数量、入驻率、品类分布、品类营收 |
//! | /api/top-stores/?limit= | GET | 营收排行 (默认 5) |
//! | /api/lease-timeline/?limit= | GET | 即将到期租约 (默认 5) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/store-stats", get(handler::store_stats))
        .route("/api/store-stats/", get(handler::store_stats))
        .route("/api/top-stores", get(handler::top_stores))
        .route("/api/top-stores/", get(handler::top_stores))
        .route("/api/lease-timeline", get(handler::lease_timeline))
        .route("/api/lease-timeline/", get(handler::lease_timeline))
}
