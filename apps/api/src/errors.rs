use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::prediction::service::PredictionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Prediction(PredictionError::Encoding(e)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNKNOWN_CATEGORY",
                e.0.to_string(),
            ),
            AppError::Prediction(e) => {
                tracing::error!("Prediction error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MODEL_ERROR",
                    "The prediction models failed to produce a result".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

/// Malformed or mistyped request bodies get the same envelope as every other error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::EncodingError;
    use crate::inference::ModelInvocationError;
    use crate::lookup::{CategoryField, UnknownCategoryError};

    #[test]
    fn test_unknown_category_is_422() {
        let err = AppError::from(PredictionError::Encoding(EncodingError(
            UnknownCategoryError {
                field: CategoryField::Country,
                label: "Atlantis".to_string(),
            },
        )));
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "UNKNOWN_CATEGORY");
        assert_eq!(message, "unknown country category 'Atlantis'");
    }

    #[test]
    fn test_model_failure_is_500_without_details() {
        let err = AppError::from(PredictionError::Model(ModelInvocationError::Failed {
            model: "oblivious_trees",
            message: "secret internals".to_string(),
        }));
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "MODEL_ERROR");
        assert!(!message.contains("secret"));
    }

    #[test]
    fn test_validation_is_400() {
        let response = AppError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
