use reqwest::{header::HeaderMap, header::HeaderValue, Client};
use url::Url;

use super::error::TransportError;
use super::{ApiResponse, Transport};
use crate::config::ResolverConfig;

/// [`Transport`] backed by a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ResolverConfig) -> Result<Self, TransportError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Accept", HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(default_headers)
            .pool_max_idle_per_host(config.max_concurrent_requests);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<ApiResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(TransportError::classify)?;

        let status = response.status();
        let body = response.text().await.map_err(TransportError::classify)?;

        Ok(ApiResponse { status, body })
    }
}
