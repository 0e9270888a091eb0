//! 用户数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// 创建与更新共用的请求体，缺失字段取零值
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// 列表查询条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFilter {
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// 分页列表响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub users: Vec<User>,
    pub total_count: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
