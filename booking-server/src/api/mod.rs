//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`restaurants`] - 门店记录
//! - [`tables`] - 桌台管理接口
//! - [`availability`] - 可用桌台查询
//! - [`reservations`] - 预订接口

pub mod health;

// Data models API
pub mod availability;
pub mod reservations;
pub mod restaurants;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};
