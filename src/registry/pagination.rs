use std::fmt;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use super::Registry;
use crate::errors::{Error, Result};

/// Number of items requested per page.
pub const PAGE_SIZE: u32 = 100;

/// A paginated list endpoint of the registry API.
#[derive(Clone, Copy, Debug)]
pub enum ResourceList<'a> {
    Projects,
    Repositories {
        project: &'a str,
    },
    Artifacts {
        project: &'a str,
        repository: &'a str,
    },
}

impl ResourceList<'_> {
    /// Unescaped path segments below the API prefix.
    pub(crate) fn segments(&self) -> Vec<&str> {
        match *self {
            Self::Projects => vec!["projects"],
            Self::Repositories { project } => vec!["projects", project, "repositories"],
            Self::Artifacts {
                project,
                repository,
            } => vec!["projects", project, "repositories", repository, "artifacts"],
        }
    }
}

impl fmt::Display for ResourceList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Projects => write!(f, "projects"),
            Self::Repositories { project } => write!(f, "repositories of '{project}'"),
            Self::Artifacts {
                project,
                repository,
            } => write!(f, "artifacts of '{project}/{repository}'"),
        }
    }
}

impl Registry {
    /// Fetch every page of `list`, starting at page 1 and stopping at the first empty page.
    ///
    /// Items are returned in the order the registry served them. A non-200 status or an
    /// undecodable page aborts the enumeration and discards everything gathered so far.
    ///
    /// The registry must eventually answer with an empty page; one that keeps repeating its
    /// last page is never detected.
    pub async fn collect<T: DeserializeOwned>(&self, list: ResourceList<'_>) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for page in 1.. {
            let batch: Vec<T> = self.fetch_page(list, page).await?;
            if batch.is_empty() {
                tracing::debug!("collected {} {list} over {} pages", items.len(), page - 1);
                break;
            }
            items.extend(batch);
        }
        Ok(items)
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        list: ResourceList<'_>,
        page: u32,
    ) -> Result<Vec<T>> {
        let mut url = self.endpoint(&list.segments())?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("page_size", &PAGE_SIZE.to_string());

        let response = self.transport.send(Method::GET, url, None).await?;
        if response.status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                list: list.to_string(),
                page,
                status: response.status.as_u16(),
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| Error::DecodeError {
            list: list.to_string(),
            page,
            source,
        })
    }
}
