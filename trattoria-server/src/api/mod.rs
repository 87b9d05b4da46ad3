//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 存活探测接口
//! - [`diagnostics`] - 存储诊断接口
//! - [`menu`] - 菜单查询接口
//! - [`reservations`] - 预订提交接口
//! - [`contact`] - 留言提交接口

pub mod contact;
pub mod diagnostics;
pub mod health;
pub mod menu;
pub mod reservations;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
