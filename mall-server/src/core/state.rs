use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, DatabaseEngine, Result};
use crate::db::DbService;
use crate::metrics::{MetricsProvider, SyntheticMetrics};

/// 服务器状态 - 每个请求共享的只读引用
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | metrics | Arc<dyn MetricsProvider> | 占位经营指标 |
///
/// Clone 只复制句柄，数据库本身负责并发控制
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 经营指标提供者
    pub metrics: Arc<dyn MetricsProvider>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, metrics: Arc<dyn MetricsProvider>) -> Self {
        Self {
            config,
            db,
            metrics,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 按配置打开数据库 (内存或 work_dir/database)
    /// 2. 应用表结构
    /// 3. 使用确定性的合成指标
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = match config.database_engine {
            DatabaseEngine::Memory => DbService::memory().await?,
            DatabaseEngine::RocksDb => {
                let dir = config.database_dir();
                std::fs::create_dir_all(&dir)?;
                DbService::open(&dir.join("mall.db")).await?
            }
        };

        Ok(Self::new(
            config.clone(),
            db_service.db,
            Arc::new(SyntheticMetrics),
        ))
    }

    /// 内存数据库 + 指定指标提供者，供测试使用
    pub async fn in_memory(config: Config, metrics: Arc<dyn MetricsProvider>) -> Result<Self> {
        let db_service = DbService::memory().await?;
        Ok(Self::new(config, db_service.db, metrics))
    }
}
