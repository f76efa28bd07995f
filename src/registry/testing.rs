use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

use super::{Registry, RegistryResponse, RegistryTransport};
use crate::errors::Result;

type Handler = Box<dyn Fn(&Method, &Url) -> Result<RegistryResponse> + Send + Sync>;

/// In-memory registry that records every request and answers with `handler`.
pub(crate) struct FakeRegistry {
    handler: Handler,
    requests: Mutex<Vec<(Method, String)>>,
}

impl FakeRegistry {
    pub(crate) fn new(
        handler: impl Fn(&Method, &Url) -> RegistryResponse + Send + Sync + 'static,
    ) -> Arc<Self> {
        Self::fallible(move |method: &Method, url: &Url| Ok(handler(method, url)))
    }

    /// Like [`FakeRegistry::new`], but `handler` may fail the request at the transport level.
    pub(crate) fn fallible(
        handler: impl Fn(&Method, &Url) -> Result<RegistryResponse> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<(Method, String)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn posts(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|(method, _)| *method == Method::POST)
            .map(|(_, url)| url)
            .collect()
    }
}

#[async_trait]
impl RegistryTransport for FakeRegistry {
    async fn send(
        &self,
        method: Method,
        url: Url,
        _body: Option<Bytes>,
    ) -> Result<RegistryResponse> {
        let response = (self.handler)(&method, &url);
        self.requests.lock().unwrap().push((method, url.to_string()));
        response
    }
}

pub(crate) fn registry(fake: Arc<FakeRegistry>) -> Registry {
    Registry::new(Url::parse("http://registry.test").unwrap(), fake).unwrap()
}

pub(crate) fn json_response(status: StatusCode, value: Value) -> RegistryResponse {
    RegistryResponse::new(status, serde_json::to_vec(&value).unwrap())
}

fn query_usize(url: &Url, key: &str) -> Option<usize> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.parse().ok())
}

/// Serve `items` the way Harbor paginates lists: `page_size` items per page, then empty pages.
pub(crate) fn paged(
    items: Vec<Value>,
) -> impl Fn(&Method, &Url) -> RegistryResponse + Send + Sync + 'static {
    move |_: &Method, url: &Url| {
        let page = query_usize(url, "page").unwrap_or(1);
        let size = query_usize(url, "page_size").unwrap_or(10);
        let chunk = items
            .iter()
            .skip((page - 1) * size)
            .take(size)
            .cloned()
            .collect();
        json_response(StatusCode::OK, Value::Array(chunk))
    }
}
