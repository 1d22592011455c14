//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::app::product::store::StoreError;

/// 核心错误类型，响应体为纯文本提示
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Invalid(_) | StoreError::AlreadyExists(_) => {
                CoreError::BadRequest(err.to_string())
            }
            StoreError::NotFound(_) => CoreError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::product::rules::ValidationError;

    #[test]
    fn store_errors_map_to_status_codes() {
        let invalid = CoreError::from(StoreError::Invalid(ValidationError::MissingFields));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.to_string(), "All fields are required");

        let conflict = CoreError::from(StoreError::AlreadyExists("1".to_string()));
        assert_eq!(conflict.status(), StatusCode::BAD_REQUEST);

        let missing = CoreError::from(StoreError::NotFound("9".to_string()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "Product with ID 9 not found");
    }
}
