//! Mall Server - 商场后台店铺管理服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储和 `StoreRepository`
//! - **指标** (`metrics`): 占位经营指标 (确定性合成或注入)
//! - **统计** (`stats`): 数量、入驻率、品类分布、排行、租约
//! - **HTTP API** (`api`): JSON 接口和店铺页面
//!
//! # 模块结构
//!
//! ```text
//! mall-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # 数据库层
//! ├── metrics/       # 经营指标提供者
//! ├── stats/         # 统计聚合
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 路由组装和中间件
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod metrics;
pub mod services;
pub mod stats;
pub mod utils;

// Re-export 公共类型
pub use self::core::{Config, Server, ServerState};
pub use metrics::{FixedMetrics, MetricsProvider, StoreMetrics, SyntheticMetrics};
pub use services::{build_app, build_router};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// Audit log helper - records store mutations under the `audit` target
///
/// ```ignore
/// audit_log!("create", "store:ST001", "Gadget Hub");
/// audit_log!("delete", "store:ST001");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            action = $action,
            resource = %$resource,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            action = $action,
            resource = %$resource,
            details = $details,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}

/// 加载 .env、准备工作目录、初始化日志
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.work_dir)?;

    let log_dir = config.log_to_file.then(|| config.log_dir());
    init_logger_with_file(&config.log_level, config.log_json, log_dir.as_deref())?;

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___      ____
   /  |/  /___ _/ / /
  / /|_/ / __ `/ / /
 / /  / / /_/ / / /
/_/  /_/\__,_/_/_/
    Back Office
    "#
    );
}
