//! # users-service
//!
//! 基于 Axum + SQLx 的用户 CRUD 服务，对外提供 `/users` 资源：
//! - 分页与模糊搜索的列表查询
//! - 创建、整体更新、删除
//!
//! 分层结构：`app`（路由与处理器）、`core`（错误、中间件、分页）、
//! `infrastructure`（配置、数据库、日志）。

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{cors_layer, create_router};
pub use app::users::handler::AppState;
