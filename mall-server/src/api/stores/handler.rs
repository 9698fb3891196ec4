//! Store API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Serialize;

use crate::api::convert::{StoreDetail, StoreListItem, StoreRef, store_view};
use crate::core::ServerState;
use crate::db::repository::StoreRepository;
use crate::utils::{ApiResponse, AppResult};
use shared::models::{StoreCreate, StoreFilter, StoreQuery, StoreUpdate};

#[derive(Serialize)]
pub struct StoreList {
    stores: Vec<StoreListItem>,
    count: usize,
}

#[derive(Serialize)]
pub struct StoreCreated {
    store_id: String,
    store: StoreDetail,
}

#[derive(Serialize)]
pub struct StoreSingle<T> {
    store: T,
}

/// List stores
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<StoreQuery>, QueryRejection>,
) -> AppResult<ApiResponse<StoreList>> {
    let Query(query) = query?;
    let filter = StoreFilter::try_from(query)?;

    let repo = StoreRepository::new(state.db.clone());
    let stores: Vec<StoreListItem> = repo
        .list(&filter)
        .await?
        .iter()
        .map(|s| store_view(s, state.metrics.metrics(s)))
        .collect();

    Ok(ApiResponse::success(StoreList {
        count: stores.len(),
        stores,
    }))
}

/// Create a store
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<StoreCreate>, JsonRejection>,
) -> AppResult<ApiResponse<StoreCreated>> {
    let Json(payload) = payload?;
    let data = payload.validate()?;

    let repo = StoreRepository::new(state.db.clone());
    let store = repo.create(data).await?;

    tracing::info!(store_id = %store.store_id, name = %store.name, "Store created");

    Ok(ApiResponse::success_with_message(
        "Store created successfully",
        StoreCreated {
            store_id: store.store_id.clone(),
            store: store_view(&store, state.metrics.metrics(&store).into()),
        },
    ))
}

/// Get store detail
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
) -> AppResult<ApiResponse<StoreSingle<StoreDetail>>> {
    let repo = StoreRepository::new(state.db.clone());
    let store = repo.get(&store_id).await?;

    Ok(ApiResponse::success(StoreSingle {
        store: store_view(&store, state.metrics.metrics(&store).into()),
    }))
}

/// Partially update a store
pub async fn update(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
    payload: Result<Json<StoreUpdate>, JsonRejection>,
) -> AppResult<ApiResponse<StoreSingle<StoreRef>>> {
    let Json(payload) = payload?;
    let changes = payload.validate()?;

    let repo = StoreRepository::new(state.db.clone());
    let store = repo.update(&store_id, changes).await?;

    Ok(ApiResponse::success_with_message(
        "Store updated successfully",
        StoreSingle {
            store: StoreRef::from(&store),
        },
    ))
}

/// Delete a store
pub async fn delete(
    State(state): State<ServerState>,
    Path(store_id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = StoreRepository::new(state.db.clone());
    repo.delete(&store_id).await?;

    Ok(ApiResponse::ok_with_message("Store deleted successfully"))
}
