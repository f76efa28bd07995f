use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::errors::Result;
use super::unescape_path_parameter;
use crate::registry::Registry;

pub(super) async fn list_projects(State(registry): State<Registry>) -> Result<Response> {
    let projects = registry.projects().await?;

    Ok((StatusCode::OK, Json(projects)).into_response())
}

pub(super) async fn list_repositories(
    State(registry): State<Registry>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let Path(project) = path?;
    let project = unescape_path_parameter("project", &project)?;

    let repositories = registry.repositories(&project).await?;

    Ok((StatusCode::OK, Json(repositories)).into_response())
}

pub(super) async fn list_artifacts(
    State(registry): State<Registry>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<Response> {
    let Path((project, repository)) = path?;
    let project = unescape_path_parameter("project", &project)?;
    let repository = unescape_path_parameter("repository", &repository)?;

    let artifacts = registry.artifacts(&project, &repository).await?;

    Ok((StatusCode::OK, Json(artifacts)).into_response())
}
