//! 应用层：路由注册

pub mod users;

use axum::{
    http::{header::InvalidHeaderValue, HeaderValue, Method},
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use users::handler::{create_user, delete_user, list_users, update_user, AppState};

/// 只允许单一来源，方法限定为 GET/POST/PUT/DELETE，请求头按预检请求原样放行
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin: HeaderValue = origin.parse()?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request()))
}

pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
