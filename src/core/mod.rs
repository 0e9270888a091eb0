//! 核心层：错误处理、中间件、分页

pub mod error;
pub mod middleware;
pub mod pagination;
