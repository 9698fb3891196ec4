//! Dashboard pages
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 跳转到 /stores/ |
//! | /stores/ | GET | 店铺列表页 (支持与 API 相同的过滤参数) |

mod render;

use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    response::{Html, Redirect},
    routing::get,
};
use shared::models::{StoreFilter, StoreQuery};

use crate::core::ServerState;
use crate::db::repository::StoreRepository;
use crate::stats::StatsAggregator;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(index))
        .route("/stores", get(stores_page))
        .route("/stores/", get(stores_page))
}

async fn index() -> Redirect {
    Redirect::to("/stores/")
}

/// 统计始终基于全部店铺，列表按过滤条件显示
async fn stores_page(
    State(state): State<ServerState>,
    query: Result<Query<StoreQuery>, QueryRejection>,
) -> AppResult<Html<String>> {
    let Query(query) = query?;
    let filter = StoreFilter::try_from(query)?;

    let repo = StoreRepository::new(state.db.clone());
    let all = repo.find_all().await?;
    let shown = if filter.is_unfiltered() {
        all.clone()
    } else {
        repo.list(&filter).await?
    };

    let stats = StatsAggregator::new(&all, state.metrics.as_ref(), state.config.capacity);
    let page = render::stores_page(&shown, &stats.summary(), &filter, state.metrics.as_ref());
    Ok(Html(page))
}
