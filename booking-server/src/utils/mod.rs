//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`logger`] - tracing 日志初始化
//! - [`time`] - 时段规范化、日期校验
//! - [`validation`] - 文本长度与数值校验

pub mod logger;
pub mod time;
pub mod validation;

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
