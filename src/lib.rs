//! # 产品 API
//!
//! 基于 Axum 的内存产品 CRUD 服务：
//! - `core`: 错误处理、请求日志与鉴权中间件
//! - `app`: 产品模型、服务与处理器，以及路由装配
//! - `infrastructure`: 配置与日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::build_router;
pub use crate::core::error::CoreError;
