//! Repository Module
//!
//! CRUD over SurrealDB tables.

pub mod store;

pub use store::StoreRepository;

use shared::AppError;
use shared::models::StoreFieldError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Validation(#[from] StoreFieldError),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::store_not_found(&id),
            RepoError::Duplicate(id) => AppError::with_message(
                shared::ErrorCode::StoreIdExists,
                format!("Store {} already exists", id),
            )
            .with_detail("store_id", id),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(e) => e.into(),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
