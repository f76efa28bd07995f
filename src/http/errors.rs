use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid {0} name")]
    InvalidPathParameter(&'static str),
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
    #[error("{0}")]
    InvalidBody(serde_json::Error),

    #[error(transparent)]
    Registry(#[from] crate::Error),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Error::InvalidPathParameter(_) | Error::PathRejection(_) | Error::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Registry(e) => {
                tracing::warn!("{e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}
