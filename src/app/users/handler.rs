//! 用户处理器

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{
    model::{MessageResponse, UserFilter, UserPage, UserPayload},
    service::UserRepository,
};
use crate::core::{
    error::CoreError,
    pagination::{PageQuery, Pagination},
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new<R: UserRepository + 'static>(repository: R) -> Self {
        Self {
            users: Arc::new(repository),
        }
    }
}

fn parse_payload(payload: Result<Json<UserPayload>, JsonRejection>) -> Result<UserPayload, CoreError> {
    payload.map(|Json(user)| user).map_err(|rejection| {
        warn!("Error parsing user data: {}", rejection);
        CoreError::bad_request("Failed to parse request body")
    })
}

fn parse_id(raw: &str) -> Result<i32, CoreError> {
    raw.parse()
        .map_err(|_| CoreError::bad_request("Invalid user id"))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<UserPage>, CoreError> {
    let query = PageQuery::from_pairs(pairs);
    let pagination = Pagination::from_query(&query);
    let search = query.search.filter(|s| !s.is_empty());
    let filter = UserFilter {
        search,
        limit: pagination.limit,
        offset: pagination.offset(),
    };
    debug!("列出用户: {:?}", filter);

    let users = state
        .users
        .list(&filter)
        .await
        .map_err(|e| CoreError::database("Failed to fetch users", e))?;

    let total_count = state
        .users
        .count(filter.search.as_deref())
        .await
        .map_err(|e| CoreError::database("Failed to count users", e))?;

    Ok(Json(UserPage { users, total_count }))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), CoreError> {
    let user = parse_payload(payload)?;

    state
        .users
        .create(&user)
        .await
        .map_err(|e| CoreError::database("Failed to create user", e))?;

    debug!("创建用户: {}", user.name);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// PUT /users/:id
///
/// 整体覆盖 name/email/age。id 不存在时不报错，仍返回 200。
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> Result<StatusCode, CoreError> {
    let user = parse_payload(payload)?;
    let id = parse_id(&id)?;

    let affected = state
        .users
        .update(id, &user)
        .await
        .map_err(|e| CoreError::database("Failed to update user", e))?;

    if affected == 0 {
        debug!("更新用户 {}: 未匹配任何行", id);
    } else {
        info!("更新用户: {}", id);
    }
    Ok(StatusCode::OK)
}

/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    let id = parse_id(&id)?;

    let affected = state
        .users
        .delete(id)
        .await
        .map_err(|e| CoreError::database("Failed to delete user", e))?;

    if affected == 0 {
        debug!("删除用户 {}: 未匹配任何行", id);
    } else {
        info!("删除用户: {}", id);
    }
    Ok(StatusCode::OK)
}
