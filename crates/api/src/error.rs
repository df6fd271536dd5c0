//! Mapping from registry failures to HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use registry::{ErrorDetails, RegistryError};

/// Error returned by every handler. The body is always [`ErrorDetails`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The request body was missing, not JSON, or the wrong shape.
    #[error(transparent)]
    Body(#[from] JsonRejection),

    /// A path segment did not parse, e.g. a malformed UUID.
    #[error(transparent)]
    Path(#[from] PathRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, details) = match self {
            Self::Body(rejection) => bad_request(rejection.body_text()),
            Self::Path(rejection) => bad_request(rejection.body_text()),
            Self::Registry(RegistryError::NotFound(message)) => (
                StatusCode::NOT_FOUND,
                ErrorDetails::new(message, StatusCode::NOT_FOUND.as_u16()),
            ),
            Self::Registry(RegistryError::Conflict(details)) => (
                StatusCode::from_u16(details.status).unwrap_or(StatusCode::UNPROCESSABLE_ENTITY),
                details,
            ),
            Self::Registry(RegistryError::Database(e)) => {
                error!(error = %e, "request failed in the persistence layer");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetails::new(
                        "internal server error",
                        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    ),
                )
            }
        };

        (status, Json(details)).into_response()
    }
}

fn bad_request(message: String) -> (StatusCode, ErrorDetails) {
    (
        StatusCode::BAD_REQUEST,
        ErrorDetails::new(message, StatusCode::BAD_REQUEST.as_u16()),
    )
}
