#[allow(clippy::module_inception)]
mod client;
mod error;

pub use client::HttpTransport;
pub use error::TransportError;

use http::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

/// A request against the daemon's local API.
///
/// Each dialect's endpoint implements this to describe where it lives and
/// what its success body looks like.
pub trait ApiRequest {
    type Response: DeserializeOwned;

    fn build_url(&self, base_url: &str) -> Result<Url, url::ParseError>;
}

/// Status and body of a complete HTTP exchange
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues GET requests to the daemon.
///
/// Anything that does not produce a well formed HTTP response must come
/// back as a [`TransportError`]; those are the only failures that get
/// retried.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<ApiResponse, TransportError>;
}
