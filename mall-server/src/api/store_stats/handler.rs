//! Store Statistics Handlers
//!
//! Every handler loads the full collection once and aggregates in memory.

use axum::extract::{Query, State, rejection::QueryRejection};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::StoreCategory;
use shared::util::today;
use std::collections::BTreeMap;

use crate::core::ServerState;
use crate::db::repository::StoreRepository;
use crate::metrics::Performance;
use crate::stats::{DEFAULT_RANK_LIMIT, LeaseUrgency, StatsAggregator};
use crate::utils::{ApiResponse, AppResult};

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct StatsView {
    total_stores: usize,
    open_stores: usize,
    closed_stores: usize,
    maintenance_stores: usize,
    occupancy_rate: f64,
    capacity: u32,
    average_size: f64,
    average_rent: f64,
    avg_rating: f64,
    categories: BTreeMap<StoreCategory, usize>,
    category_revenue: BTreeMap<StoreCategory, f64>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    stats: StatsView,
}

#[derive(Serialize)]
pub struct TopStoreView {
    id: String,
    name: String,
    category: StoreCategory,
    revenue: u64,
    rating: f64,
    performance: Performance,
}

#[derive(Serialize)]
pub struct TopStoresResponse {
    top_stores: Vec<TopStoreView>,
}

#[derive(Serialize)]
pub struct LeaseView {
    id: String,
    name: String,
    lease_end: NaiveDate,
    days_until: i64,
    urgency: LeaseUrgency,
}

#[derive(Serialize)]
pub struct LeaseTimelineResponse {
    lease_timeline: Vec<LeaseView>,
}

/// GET /api/store-stats/
pub async fn store_stats(State(state): State<ServerState>) -> AppResult<ApiResponse<StatsResponse>> {
    let stores = StoreRepository::new(state.db.clone()).find_all().await?;
    let stats = StatsAggregator::new(&stores, state.metrics.as_ref(), state.config.capacity);
    let summary = stats.summary();

    Ok(ApiResponse::success(StatsResponse {
        stats: StatsView {
            total_stores: summary.total_stores,
            open_stores: summary.active_stores,
            closed_stores: summary.inactive_stores,
            maintenance_stores: summary.maintenance_stores,
            occupancy_rate: summary.occupancy_rate,
            capacity: summary.capacity,
            average_size: summary.average_size,
            average_rent: summary.average_rent,
            avg_rating: summary.avg_rating,
            categories: stats.category_distribution(),
            category_revenue: stats.category_revenue(),
        },
    }))
}

/// GET /api/top-stores/
pub async fn top_stores(
    State(state): State<ServerState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> AppResult<ApiResponse<TopStoresResponse>> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_RANK_LIMIT);

    let stores = StoreRepository::new(state.db.clone()).find_all().await?;
    let top_stores = StatsAggregator::new(&stores, state.metrics.as_ref(), state.config.capacity)
        .top_performers(limit)
        .into_iter()
        .map(|t| TopStoreView {
            id: t.store_id,
            name: t.name,
            category: t.category,
            revenue: t.revenue,
            rating: t.rating,
            performance: t.performance,
        })
        .collect();

    Ok(ApiResponse::success(TopStoresResponse { top_stores }))
}

/// GET /api/lease-timeline/
pub async fn lease_timeline(
    State(state): State<ServerState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> AppResult<ApiResponse<LeaseTimelineResponse>> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_RANK_LIMIT);

    let stores = StoreRepository::new(state.db.clone()).find_all().await?;
    let lease_timeline = StatsAggregator::new(&stores, state.metrics.as_ref(), state.config.capacity)
        .lease_timeline(limit, today())
        .into_iter()
        .map(|e| LeaseView {
            id: e.store_id,
            name: e.name,
            lease_end: e.lease_end,
            days_until: e.days_until,
            urgency: e.urgency,
        })
        .collect();

    Ok(ApiResponse::success(LeaseTimelineResponse { lease_timeline }))
}
