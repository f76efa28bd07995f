//! Inbound HTTP API.
//!
//! | Method | Path                                                        |
//! |--------|-------------------------------------------------------------|
//! | GET    | `/api/projects`                                             |
//! | GET    | `/api/projects/:project/repositories`                       |
//! | GET    | `/api/projects/:project/repositories/:repository/artifacts` |
//! | POST   | `/api/copy-image`                                           |
//! | POST   | `/api/copy-repository`                                      |
//!
//! Caller errors (bad path encoding, malformed JSON bodies) are answered with `400` before the
//! registry is contacted; registry failures are answered with `500`. Error bodies have the shape
//! `{"error": "<message>"}`.
use std::borrow::Cow;

use axum::routing::{get, post};
use axum::Router;
use percent_encoding::percent_decode_str;
use tower_http::trace::{self, TraceLayer};

mod copy;
mod errors;
mod projects;

pub use errors::{Error, Result};

use crate::registry::Registry;

/// Return an [`axum::Router`] serving the relay API against `registry`.
pub fn router(registry: Registry) -> Router {
    Router::new()
        .route("/api/projects", get(projects::list_projects))
        .route(
            "/api/projects/:project/repositories",
            get(projects::list_repositories),
        )
        .route(
            "/api/projects/:project/repositories/:repository/artifacts",
            get(projects::list_artifacts),
        )
        .route("/api/copy-image", post(copy::copy_image))
        .route("/api/copy-repository", post(copy::copy_repository))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new())
                .on_request(trace::DefaultOnRequest::new())
                .on_response(trace::DefaultOnResponse::new()),
        )
        .with_state(registry)
}

/// Percent-decode a path parameter that the router has already decoded once.
///
/// Names containing `/` can only reach a single path parameter escaped twice (`a%252Fb`), so
/// every parameter goes through a second, strict, decoding pass.
fn unescape_path_parameter(name: &'static str, value: &str) -> Result<String> {
    let well_formed = value.split('%').skip(1).all(|escape| {
        escape.len() >= 2 && escape.as_bytes()[..2].iter().all(u8::is_ascii_hexdigit)
    });
    if !well_formed {
        return Err(Error::InvalidPathParameter(name));
    }

    percent_decode_str(value)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| Error::InvalidPathParameter(name))
}
