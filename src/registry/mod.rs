//! # Registry Orchestration
//!
//! Enumeration and copy logic for a remote Harbor registry.
//!
//! [`Registry`] is the entry point. It owns the registry base URL and a [`RegistryTransport`]
//! used to issue every request, so the orchestration here never deals with credentials or TLS
//! directly. [`RegistryClient`] is the transport used in production.
//!
//! All caller-supplied names are percent-encoded as path segments before they reach the
//! registry, and copy source references are query-escaped as a whole.
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use url::Url;

use crate::errors::{Error, Result};

mod client;
pub use client::RegistryClient;

mod copy;

mod pagination;
pub use pagination::{ResourceList, PAGE_SIZE};

pub mod types;
pub use types::{Artifact, CopyRepositoryRequest, CopyRequest, Project, Repository, Tag};

#[cfg(test)]
pub(crate) mod testing;

/// Path prefix of Harbor's v2 REST API.
const API_PREFIX: [&str; 2] = ["api", "v2.0"];

/// Issues a single request against the registry.
///
/// Implementations attach whatever authentication the registry requires and return the response
/// status along with the fully read body. Transport-level failures (connection refused, DNS, TLS
/// handshake) are returned as errors; non-2xx responses are not.
#[async_trait]
pub trait RegistryTransport: Send + Sync + 'static {
    async fn send(&self, method: Method, url: Url, body: Option<Bytes>)
        -> Result<RegistryResponse>;
}

/// Status and body of a registry response.
#[derive(Clone, Debug)]
pub struct RegistryResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RegistryResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Handle on a remote registry. Cheap to clone; shared read-only across request handlers.
#[derive(Clone)]
pub struct Registry {
    base: Url,
    transport: Arc<dyn RegistryTransport>,
}

impl Registry {
    pub fn new(base: Url, transport: Arc<dyn RegistryTransport>) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(Error::InvalidRegistryUrl(base));
        }
        Ok(Self { base, transport })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// All projects visible to the configured credentials.
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.collect(ResourceList::Projects).await
    }

    /// All repositories of `project`.
    pub async fn repositories(&self, project: &str) -> Result<Vec<Repository>> {
        self.collect(ResourceList::Repositories { project }).await
    }

    /// All artifacts of `project`/`repository`.
    pub async fn artifacts(&self, project: &str, repository: &str) -> Result<Vec<Artifact>> {
        self.collect(ResourceList::Artifacts {
            project,
            repository,
        })
        .await
    }

    /// Build an API URL from the registry base, appending each of `segments` percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidRegistryUrl(self.base.clone()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }
}
