//! Translation of domain failures into HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::service::ServiceError;
use crate::validation::ValidationErrors;

pub const ALREADY_EXISTS_MESSAGE: &str = "User with such email already exists";
pub const NOT_FOUND_MESSAGE: &str = "User with such id not found";
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("rejected request: {message}")]
    Rejected { status: StatusCode, message: String },
}

/// An unreadable body is a 400 whether it fails to parse or to bind to the
/// payload's field types. Other rejections keep axum's status.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => rejection.status(),
        };

        Self::Rejected {
            status,
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    fn status_and_messages(self) -> (StatusCode, Vec<String>) {
        match self {
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, errors.messages()),
            Self::Service(ServiceError::AlreadyExists { .. }) => {
                (StatusCode::CONFLICT, vec![ALREADY_EXISTS_MESSAGE.to_string()])
            }
            Self::Service(ServiceError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, vec![NOT_FOUND_MESSAGE.to_string()])
            }
            Self::Service(ServiceError::Store(err)) => {
                tracing::error!(error = %err, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![INTERNAL_MESSAGE.to_string()],
                )
            }
            Self::Rejected { status, message } => (status, vec![message]),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = self.status_and_messages();
        (status, Json(ErrorBody { errors })).into_response()
    }
}
