//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 存活 + 数据库连通性 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "database": { "status": "ok", "latency_ms": 1 }
//! }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;
use crate::db::DbService;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// 数据库检查
    database: CheckResult,
}

/// 单项检查结果
#[derive(Serialize)]
pub struct CheckResult {
    /// 状态 (ok | error)
    status: &'static str,
    /// 延迟 (毫秒)
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

// 服务器启动时间 (懒加载静态变量)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// 健康检查: 数据库不可用时返回 503
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let db_start = std::time::Instant::now();
    let database = match DbService::ping(&state.pool).await {
        Ok(()) => CheckResult {
            status: "ok",
            latency_ms: Some(db_start.elapsed().as_millis() as u64),
            message: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Health check database ping failed");
            CheckResult {
                status: "error",
                latency_ms: None,
                message: Some("database unavailable".to_string()),
            }
        }
    };

    let healthy = database.status == "ok";
    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthResponse {
            status: if healthy { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: get_uptime_seconds(),
            database,
        }),
    )
}
