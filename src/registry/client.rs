use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use url::Url;

use super::{RegistryResponse, RegistryTransport};
use crate::config::HarborConfig;
use crate::errors::Result;

/// [`RegistryTransport`] that talks to Harbor over HTTP(S) using basic authentication.
///
/// Requests are sent once; there are no retries and no timeouts beyond reqwest's defaults.
pub struct RegistryClient {
    client: Client,
    username: String,
    password: String,
}

impl RegistryClient {
    pub fn new(config: &HarborConfig) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(config.insecure_skip_tls_verify)
            .build()?;

        Ok(Self {
            client,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }
}

#[async_trait]
impl RegistryTransport for RegistryClient {
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<Bytes>,
    ) -> Result<RegistryResponse> {
        tracing::debug!("{method} {url}");

        let mut request = self
            .client
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(RegistryResponse { status, body })
    }
}
