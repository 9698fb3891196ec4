//! Store Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::audit_log;
use rand::Rng;
use serde::Serialize;
use shared::models::catalog::locations_labelled_like;
use shared::models::{NewStore, Store, StoreChanges, StoreFilter, next_store_id};
use shared::util::{next_timestamp, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::time::{Duration, sleep};

const TABLE: &str = "store";

/// Upper bound on id allocation rounds for a single create
const CREATE_ATTEMPTS: u32 = 50;

/// Taken record id ("already exists") or unique index ("already contains")
fn is_duplicate(err: &surrealdb::Error) -> bool {
    let message = err.to_string();
    message.contains("already exists") || message.contains("already contains")
}

/// Optimistic transaction lost to a concurrent writer
fn is_write_conflict(err: &surrealdb::Error) -> bool {
    let message = err.to_string();
    message.contains("can be retried") || message.contains("read or write conflict")
}

/// Jittered pause between allocation rounds, growing with the attempt
fn retry_delay(attempt: u32) -> Duration {
    let ceiling = u64::from(attempt.min(10)) * 4;
    Duration::from_millis(rand::thread_rng().gen_range(1..=ceiling))
}

#[derive(Serialize)]
struct StoreUpdateDb<'a> {
    #[serde(flatten)]
    changes: &'a StoreChanges,
    updated_at: i64,
}

#[derive(Clone)]
pub struct StoreRepository {
    base: BaseRepository,
}

impl StoreRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// List stores matching every supplied predicate, in numeric id order
    pub async fn list(&self, filter: &StoreFilter) -> RepoResult<Vec<Store>> {
        let mut conditions = Vec::new();
        if filter.category.is_some() {
            conditions.push("category = $category");
        }
        if filter.status.is_some() {
            conditions.push("status = $status");
        }
        if filter.search.is_some() {
            conditions.push(
                "(string::contains(string::lowercase(name), $q) \
                 OR string::contains(string::lowercase(store_id), $q) \
                 OR string::contains(string::lowercase(location), $q) \
                 OR string::contains(string::lowercase(owner), $q) \
                 OR location IN $label_hits)",
            );
        }

        let mut sql = format!("SELECT * OMIT id FROM {}", TABLE);
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        let mut query = self.base.db().query(sql);
        if let Some(category) = filter.category {
            query = query.bind(("category", category.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.bind(("status", status.as_str()));
        }
        if let Some(q) = &filter.search {
            let label_hits: Vec<String> = locations_labelled_like(q)
                .into_iter()
                .map(|l| l.code().to_string())
                .collect();
            query = query.bind(("q", q.clone())).bind(("label_hits", label_hits));
        }

        let mut stores: Vec<Store> = query.await?.take(0)?;
        stores.sort_by(|a, b| {
            a.sequence()
                .cmp(&b.sequence())
                .then_with(|| a.store_id.cmp(&b.store_id))
        });
        Ok(stores)
    }

    /// Full collection
    pub async fn find_all(&self) -> RepoResult<Vec<Store>> {
        self.list(&StoreFilter::default()).await
    }

    pub async fn find_by_id(&self, store_id: &str) -> RepoResult<Option<Store>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * OMIT id FROM type::thing($table, $id)")
            .bind(("table", TABLE))
            .bind(("id", store_id.to_string()))
            .await?;
        let stores: Vec<Store> = result.take(0)?;
        Ok(stores.into_iter().next())
    }

    /// Get a store, `NotFound` if absent
    pub async fn get(&self, store_id: &str) -> RepoResult<Store> {
        self.find_by_id(store_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(store_id.to_string()))
    }

    /// Create a store under the next sequential identifier
    ///
    /// The record id is the store id itself, so of two racing creations
    /// only one can claim it. The loser recomputes the next id and tries
    /// again; `Duplicate` only once every round was lost.
    pub async fn create(&self, data: NewStore) -> RepoResult<Store> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let store_id = self.next_id().await?;
            let store = data.clone().into_store(store_id.clone(), now_millis());

            let outcome = self
                .base
                .db()
                .query("CREATE type::thing($table, $id) CONTENT $data")
                .bind(("table", TABLE))
                .bind(("id", store_id.clone()))
                .bind(("data", store.clone()))
                .await
                .and_then(|response| response.check());

            match outcome {
                Ok(_) => {
                    audit_log!("create", format!("store:{}", store.store_id), store.name.as_str());
                    return Ok(store);
                }
                Err(e) if is_duplicate(&e) || is_write_conflict(&e) => {
                    if attempt >= CREATE_ATTEMPTS {
                        tracing::warn!(store_id = %store_id, attempts = attempt, "Store id allocation exhausted");
                        return Err(RepoError::Duplicate(store_id));
                    }
                    tracing::debug!(store_id = %store_id, attempt, "Store id taken concurrently, retrying");
                    sleep(retry_delay(attempt)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn next_id(&self) -> RepoResult<String> {
        let mut result = self
            .base
            .db()
            .query("SELECT VALUE store_id FROM type::table($table)")
            .bind(("table", TABLE))
            .await?;
        let existing: Vec<String> = result.take(0)?;
        Ok(next_store_id(existing.iter().map(String::as_str)))
    }

    /// Apply the supplied fields only, refreshing `updated_at`
    pub async fn update(&self, store_id: &str, changes: StoreChanges) -> RepoResult<Store> {
        let existing = self.get(store_id).await?;

        let data = StoreUpdateDb {
            changes: &changes,
            updated_at: next_timestamp(existing.updated_at),
        };
        let value = serde_json::to_value(&data)
            .map_err(|e| RepoError::Database(format!("Failed to encode update: {}", e)))?;

        self.base
            .db()
            .query("UPDATE type::thing($table, $id) MERGE $data")
            .bind(("table", TABLE))
            .bind(("id", store_id.to_string()))
            .bind(("data", value))
            .await?
            .check()?;

        audit_log!("update", format!("store:{}", store_id));
        self.get(store_id).await
    }

    /// Hard delete, `NotFound` if absent
    pub async fn delete(&self, store_id: &str) -> RepoResult<()> {
        let existing = self.get(store_id).await?;

        self.base
            .db()
            .query("DELETE type::thing($table, $id)")
            .bind(("table", TABLE))
            .bind(("id", store_id.to_string()))
            .await?
            .check()?;

        audit_log!("delete", format!("store:{}", store_id), existing.name.as_str());
        Ok(())
    }
}
