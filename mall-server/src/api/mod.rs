//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`pages`] - 首页跳转和店铺页面
//! - [`stores`] - 店铺增删改查
//! - [`store_stats`] - 店铺统计、排行和租约时间线
//!
//! 每个路径同时注册带 `/` 和不带 `/` 的两种形式

pub mod convert;

pub mod health;
pub mod pages;
pub mod store_stats;
pub mod stores;

pub use crate::utils::{ApiResponse, AppResult};
