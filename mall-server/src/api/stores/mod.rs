//! Store API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/stores/ | GET | 列表 (category, status, search 过滤) |
//! | /api/stores/ | POST | 新建，自动分配 ST### 编号 |
//! | /api/stores/{store_id}/ | GET | 详情 (含占位经营指标) |
//! | /api/stores/{store_id}/ | PUT | 部分更新 |
//! | /api/stores/{store_id}/ | DELETE | 删除 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let collection = || get(handler::list).post(handler::create);
    let member = || {
        get(handler::get_by_id)
            .put(handler::update)
            .delete(handler::delete)
    };

    Router::new()
        .route("/api/stores", collection())
        .route("/api/stores/", collection())
        .route("/api/stores/{store_id}", member())
        .route("/api/stores/{store_id}/", member())
}
