//! # Harbor Relay
//!
//! `harbor_relay` exposes a small HTTP API in front of a [Harbor](https://goharbor.io) registry.
//! Callers can enumerate projects, repositories and artifacts, and ask for an artifact (or every
//! tagged artifact in a repository) to be copied to another project/repository of the same
//! registry.
//!
//! The registry itself does the heavy lifting: copies are triggered through Harbor's
//! `POST /api/v2.0/projects/{project}/repositories/{repository}/artifacts?from=<ref>` endpoint,
//! and nothing is stored or cached here.
//!
//! ## Example `main.rs`
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use harbor_relay::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::from_file("./config.yaml")?;
//!     let registry = config.harbor.new_registry()?;
//!
//!     axum::Server::bind(&config.listen_address)
//!         .serve(harbor_relay::http::router(registry).into_make_service())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
mod config;
pub use config::Config;
pub use config::HarborConfig;

mod errors;
pub use errors::{Error, Result};

pub mod http;
pub mod registry;
pub use registry::Registry;
