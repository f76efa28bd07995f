use std::fs::File;
use std::io::Read;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use url::Url;

use crate::errors::Result;
use crate::registry::{Registry, RegistryClient};

#[derive(Clone, Deserialize)]
pub struct Config {
    pub harbor: HarborConfig,
    #[serde(default = "default_listen_address")]
    pub listen_address: SocketAddr,
}

impl Config {
    /// Read and parse a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut s = String::new();
        file.read_to_string(&mut s)?;
        Self::from_yaml(&s)
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}

/// Connection parameters for the Harbor instance being relayed.
#[derive(Clone, Deserialize)]
pub struct HarborConfig {
    /// Base URL of the registry, eg `https://harbor.example.com`.
    pub url: Url,
    pub username: String,
    pub password: String,
    /// Skip TLS certificate verification. Defaults to `true` since registries fronted by this
    /// relay are typically privately hosted behind self-signed certificates.
    #[serde(default = "default_insecure_skip_tls_verify")]
    pub insecure_skip_tls_verify: bool,
}

impl HarborConfig {
    /// Build a [`Registry`] backed by a [`RegistryClient`] using these settings.
    pub fn new_registry(&self) -> Result<Registry> {
        if self.insecure_skip_tls_verify {
            tracing::warn!(
                "TLS certificate verification disabled for registry at {}",
                self.url,
            );
        }
        let client = RegistryClient::new(self)?;
        Registry::new(self.url.clone(), Arc::new(client))
    }
}

fn default_listen_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_insecure_skip_tls_verify() -> bool {
    true
}
