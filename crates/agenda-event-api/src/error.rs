use crate::models::Violations;
use agenda_event::model::datetime_minute;
use agenda_event::EventError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 活动未找到
    NotFound { id: i64, path: String },
    /// 输入校验失败（字段名 -> 约束提示）
    ValidationError(Violations),
    /// 数据库错误
    DatabaseError(String),
    /// 内部错误
    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { id, .. } => write!(f, "Event id {} not found.", id),
            ApiError::ValidationError(violations) => {
                write!(f, "Validation error on {} field(s)", violations.len())
            }
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// 从服务层错误转换，补充请求路径用于 404 响应体
    pub fn from_event_error(err: EventError, path: &str) -> Self {
        match err {
            EventError::NotFound(id) => ApiError::NotFound {
                id,
                path: path.to_string(),
            },
            EventError::DatabaseError(err) => ApiError::DatabaseError(err.to_string()),
            EventError::Other(err) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { id, path } => {
                let timestamp = chrono::Local::now()
                    .format(datetime_minute::FORMAT)
                    .to_string();
                let body = Json(json!({
                    "timestamp": timestamp,
                    "status": 404,
                    "error": "Not Found",
                    "message": format!("Event id {} not found.", id),
                    "path": path,
                }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::ValidationError(violations) => {
                (StatusCode::BAD_REQUEST, Json(violations)).into_response()
            }
            ApiError::DatabaseError(msg) | ApiError::InternalError(msg) => {
                // 内部细节只进日志，不进响应体
                tracing::error!(error = %msg, "Request failed");
                let body = Json(json!({
                    "status": 500,
                    "error": "Internal Server Error",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
