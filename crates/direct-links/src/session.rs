use std::time::Duration;

use http::StatusCode;
use tokio::sync::Semaphore;
use url::Url;

use crate::client::{ApiRequest, ApiResponse, Transport};
use crate::config::ResolverConfig;
use crate::error::{ResolveError, SessionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub attempts: u32,
    /// Pause between consecutive attempts
    pub delay: Duration,
}

impl From<&ResolverConfig> for RetryPolicy {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            attempts: config.retry_attempts,
            delay: config.retry_delay,
        }
    }
}

/// Open connection state shared by every in-flight resolve call.
///
/// Owns the transport (and with it the connection pool) and the gate that
/// bounds how many requests are outstanding at once. Dropping the session
/// releases both.
pub struct Session<T> {
    transport: T,
    gate: Semaphore,
    base_url: String,
    retry: RetryPolicy,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T, config: &ResolverConfig) -> Self {
        Self {
            transport,
            gate: Semaphore::new(config.max_concurrent_requests),
            base_url: config.api_base(),
            retry: RetryPolicy::from(config),
        }
    }

    /// Number of gate slots currently free
    pub fn available_slots(&self) -> usize {
        self.gate.available_permits()
    }

    /// Issues `request` under the gate, retrying transport failures and
    /// error statuses.
    ///
    /// The slot is held for the whole retry loop. A 400 means the daemon
    /// cannot resolve the path and is never retried.
    pub async fn fetch<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ResolveError> {
        let url = request.build_url(&self.base_url)?;

        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| SessionError::Closed)?;

        let response = self.send_with_retry(&url).await?;

        if response.status == StatusCode::BAD_REQUEST {
            return Err(ResolveError::NotResolvable);
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Returns the first 2xx or 400 response. Anything else is retried, and
    /// the last failure is returned once attempts run out.
    async fn send_with_retry(&self, url: &Url) -> Result<ApiResponse, ResolveError> {
        let mut attempt = 1;
        loop {
            let error = match self.transport.get(url).await {
                Ok(response) if is_final(response.status) => return Ok(response),
                Ok(response) => ResolveError::HttpStatus(response.status),
                Err(e) => ResolveError::Transport(e),
            };
            if attempt >= self.retry.attempts {
                return Err(error);
            }
            tracing::debug!(
                %url,
                attempt,
                max_attempts = self.retry.attempts,
                %error,
                "request failed, retrying"
            );
            tokio::time::sleep(self.retry.delay).await;
            attempt += 1;
        }
    }
}

fn is_final(status: StatusCode) -> bool {
    status.is_success() || status == StatusCode::BAD_REQUEST
}
