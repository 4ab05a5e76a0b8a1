use std::path::PathBuf;

use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::services::{AvailabilityEngine, BookingManager, TableRegistry};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是廉价克隆 (`SqlitePool` 内部为 Arc)，可直接作为 axum State。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | tables | TableRegistry | 桌台登记 |
/// | availability | AvailabilityEngine | 可用桌台查询 |
/// | booking | BookingManager | 预订生命周期 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// 桌台登记
    pub tables: TableRegistry,
    /// 可用桌台查询
    pub availability: AvailabilityEngine,
    /// 预订生命周期
    pub booking: BookingManager,
}

impl ServerState {
    /// 基于已打开的连接池构造状态
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self {
            tables: TableRegistry::new(pool.clone()),
            availability: AvailabilityEngine::new(pool.clone()),
            booking: BookingManager::new(pool.clone()),
            config,
            pool,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (work_dir, work_dir/logs, 数据库所在目录)
    /// 2. 数据库 (WAL + 迁移)
    /// 3. 各服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        std::fs::create_dir_all(config.log_dir())?;
        if let Some(parent) = PathBuf::from(&config.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db = DbService::new(
            &config.database_path,
            config.db_max_connections,
            config.busy_timeout(),
        )
        .await
        .map_err(|e| ServerError::Database(e.to_string()))?;

        Ok(Self::new(config.clone(), db.pool))
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }
}
