//! Database Module
//!
//! Embedded SurrealDB: in-memory by default, RocksDB when a path is given.

pub mod repository;

use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "mall";
const DATABASE: &str = "backoffice";

/// Table and index definitions, idempotent
const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS store SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS store_id_unique ON store FIELDS store_id UNIQUE;
    DEFINE INDEX IF NOT EXISTS store_category ON store FIELDS category;
    DEFINE INDEX IF NOT EXISTS store_status ON store FIELDS status;
";

/// Database service
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open a throwaway in-memory database
    pub async fn memory() -> Result<Self, surrealdb::Error> {
        let db = Surreal::new::<Mem>(()).await?;
        Self::prepare(db).await
    }

    /// Open (or create) a RocksDB database at `path`
    pub async fn open(path: &Path) -> Result<Self, surrealdb::Error> {
        let db = Surreal::new::<RocksDb>(path).await?;
        tracing::info!(path = %path.display(), "Database opened");
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, surrealdb::Error> {
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;
        db.query(SCHEMA).await?.check()?;
        Ok(Self { db })
    }
}
