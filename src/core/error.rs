//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid category id: {0:?}")]
    InvalidCategory(Option<i32>),
    #[error("storage error while {context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// 用于 `map_err`，给 sqlx 错误附加上下文
    pub fn storage(context: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
        move |source| CoreError::Storage { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InvalidCategory(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CoreError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, user_message) = match &self {
            CoreError::Validation(msg) => ("BAD_REQUEST", msg.clone()),
            CoreError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            CoreError::InvalidCategory(_) => ("INVALID_CATEGORY", self.to_string()),
            CoreError::Storage { context, source } => {
                error!(context = %context, error = %source, "storage failure");
                ("INTERNAL_SERVER_ERROR", "internal server error".to_string())
            }
        };

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();

        CoreError::Validation(messages.join(", "))
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Validation(format!("invalid request payload: {}", err))
    }
}
