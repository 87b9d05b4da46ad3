//! 业务服务模块
//!
//! # 结构
//!
//! - [`catalog`] - 菜单目录服务 (种子数据 + 检索)
//! - [`reservations`] - 预订接收服务
//! - [`contact`] - 留言接收服务

pub mod catalog;
pub mod contact;
pub mod reservations;

pub use catalog::MenuCatalogService;
pub use contact::{ContactIntakeService, ContactOutcome};
pub use reservations::ReservationIntakeService;
