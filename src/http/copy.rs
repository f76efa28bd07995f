use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use super::errors::{Error, Result};
use crate::registry::{CopyRepositoryRequest, CopyRequest, Registry};

#[derive(Debug, Serialize)]
struct Message {
    message: &'static str,
}

// Bodies are decoded regardless of the request's content type.
pub(super) async fn copy_image(State(registry): State<Registry>, body: Bytes) -> Result<Response> {
    let request: CopyRequest = serde_json::from_slice(&body).map_err(Error::InvalidBody)?;
    registry.copy_artifact(&request).await?;

    let message = Message {
        message: "Image copy initiated successfully",
    };
    Ok((StatusCode::OK, Json(message)).into_response())
}

pub(super) async fn copy_repository(
    State(registry): State<Registry>,
    body: Bytes,
) -> Result<Response> {
    let request: CopyRepositoryRequest =
        serde_json::from_slice(&body).map_err(Error::InvalidBody)?;
    registry.copy_repository(&request).await?;

    let message = Message {
        message: "Repository copy completed successfully",
    };
    Ok((StatusCode::OK, Json(message)).into_response())
}
