//! 服务层 - 预订核心服务
//!
//! # 服务列表
//!
//! - [`TableRegistry`] - 桌台登记 (编号、容量、启用状态、删除保护)
//! - [`AvailabilityEngine`] - 时段可用桌台查询
//! - [`BookingManager`] - 预订创建、修改与状态机
//!
//! 所有服务只持有 `SqlitePool`，克隆成本极低。

pub mod availability;
pub mod booking;
pub mod error;
pub mod table_registry;

pub use availability::AvailabilityEngine;
pub use booking::BookingManager;
pub use error::{ServiceError, ServiceResult};
pub use table_registry::TableRegistry;
