use reqwest::{Method, StatusCode};

use super::pagination::ResourceList;
use super::types::{CopyRepositoryRequest, CopyRequest};
use super::Registry;
use crate::errors::{Error, Result};

impl Registry {
    /// Copy the artifact tagged `src_tag` in `src_project/src_repo` into
    /// `dest_project/dest_repo`.
    ///
    /// Harbor keeps the source tag on the copied artifact; `dest_tag` does not take part in the
    /// request.
    pub async fn copy_artifact(&self, request: &CopyRequest) -> Result<()> {
        let source = format!(
            "{}/{}:{}",
            request.src_project, request.src_repo, request.src_tag
        );
        tracing::info!(
            "copying {source} to {}/{}",
            request.dest_project,
            request.dest_repo
        );
        self.copy_from(&request.dest_project, &request.dest_repo, &source)
            .await
    }

    /// Copy every tagged artifact of `src_project/src_repo` into `dest_project/dest_repo`.
    ///
    /// One copy is issued per tag, referencing the artifact by digest, strictly in the order the
    /// registry listed artifacts and their tags. The first failing copy aborts the remainder;
    /// copies already made are left in place.
    pub async fn copy_repository(&self, request: &CopyRepositoryRequest) -> Result<()> {
        let artifacts = self
            .artifacts(&request.src_project, &request.src_repo)
            .await
            .map_err(|e| Error::ArtifactListFailed(Box::new(e)))?;

        let mut copied = 0usize;
        for artifact in &artifacts {
            if artifact.tags.is_empty() {
                tracing::debug!("skipping untagged artifact {}", artifact.digest);
                continue;
            }

            let source = format!(
                "{}/{}@{}",
                request.src_project, request.src_repo, artifact.digest
            );
            for tag in &artifact.tags {
                tracing::info!(
                    "copying {source} (tag {}) to {}/{}",
                    tag.name,
                    request.dest_project,
                    request.dest_repo,
                );
                self.copy_from(&request.dest_project, &request.dest_repo, &source)
                    .await
                    .map_err(|e| match e {
                        Error::CopyFailed { status, body } => Error::DigestCopyRejected {
                            digest: artifact.digest.clone(),
                            status,
                            body,
                        },
                        e => Error::DigestCopyFailed {
                            digest: artifact.digest.clone(),
                            source: Box::new(e),
                        },
                    })?;
                copied += 1;
            }
        }

        tracing::info!(
            "copied {copied} tags from {}/{} to {}/{}",
            request.src_project,
            request.src_repo,
            request.dest_project,
            request.dest_repo,
        );
        Ok(())
    }

    /// Ask the registry to copy `source` into `project/repository`. Only 201 counts as success.
    async fn copy_from(&self, project: &str, repository: &str, source: &str) -> Result<()> {
        let list = ResourceList::Artifacts {
            project,
            repository,
        };
        let mut url = self.endpoint(&list.segments())?;
        url.query_pairs_mut().append_pair("from", source);

        let response = self.transport.send(Method::POST, url, None).await?;
        if response.status != StatusCode::CREATED {
            return Err(Error::CopyFailed {
                status: response.status.as_u16(),
                body: response.text(),
            });
        }
        Ok(())
    }
}
