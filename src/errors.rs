use thiserror;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("config deserialization error: {0}")]
    ConfigError(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("registry url cannot carry path segments: {0}")]
    InvalidRegistryUrl(url::Url),

    #[error("registry request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("unexpected status code {status} on page {page} of {list}")]
    UnexpectedStatus {
        list: String,
        page: u32,
        status: u16,
    },
    #[error("failed to decode page {page} of {list}: {source}")]
    DecodeError {
        list: String,
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("copy failed with status code {status}: {body}")]
    CopyFailed { status: u16, body: String },
    #[error("copy failed for digest {digest}: status {status}, response: {body}")]
    DigestCopyRejected {
        digest: String,
        status: u16,
        body: String,
    },
    #[error("copy failed for digest {digest}: {source}")]
    DigestCopyFailed {
        digest: String,
        #[source]
        source: Box<Error>,
    },
    #[error("failed to get artifacts: {0}")]
    ArtifactListFailed(#[source] Box<Error>),
}
