//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

/// 核心错误类型
///
/// 每个变体携带返回给调用方的错误消息，数据库错误额外保留底层原因用于日志。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}: {source}")]
    Database {
        message: String,
        #[source]
        source: sqlx::Error,
    },
}

impl CoreError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        CoreError::BadRequest(message.into())
    }

    /// 包装数据库错误，`message` 是对外暴露的描述
    pub fn database(message: impl Into<String>, source: sqlx::Error) -> Self {
        CoreError::Database {
            message: message.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 对外的错误消息，不包含底层错误细节
    pub fn public_message(&self) -> &str {
        match self {
            CoreError::BadRequest(msg) => msg,
            CoreError::Database { message, .. } => message,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let CoreError::Database { message, source } = &self {
            error!("{}: {}", message, source);
        }

        let body = serde_json::json!({ "error": self.public_message() });
        (status, Json(body)).into_response()
    }
}
