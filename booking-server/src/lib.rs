//! Booking Server - 餐厅桌台预订服务
//!
//! # 架构概述
//!
//! 本模块是预订服务的主入口，提供以下核心功能：
//!
//! - **桌台登记** (`services::table_registry`): 桌号、容量、启用状态、删除保护
//! - **可用性查询** (`services::availability`): 某时段可坐下一桌客人的桌台
//! - **预订生命周期** (`services::booking`): 创建、修改、状态机
//! - **数据库** (`db`): SQLite (WAL) + sqlx 迁移，部分唯一索引保证同一时段不会重复预订
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── services/      # 桌台、可用性、预订
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 中间件装配
//! ├── utils/         # 日志、时段、校验
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use services::{AvailabilityEngine, BookingManager, ServiceError, ServiceResult, TableRegistry};

// Re-export unified error types from shared
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env，创建工作目录，初始化日志
pub fn setup_environment() -> Result<Config, ServerError> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(config.log_dir())?;

    let log_dir = config.log_dir();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        log_dir.to_str(),
    );

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____              __   _
   / __ )____  ____  / /__(_)___  ____ _
  / __  / __ \/ __ \/ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
    "#
    );
}
