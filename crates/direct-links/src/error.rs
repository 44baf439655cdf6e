use http::StatusCode;

use crate::client::TransportError;

/// Caller misuse of the resolver lifecycle.
///
/// These are the only errors [`crate::LinkResolver::resolve`] hands back;
/// everything else becomes a missing link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("resolver session not initialized, call open() first")]
    NotOpen,
    #[error("resolver session already closed")]
    Closed,
    #[error("resolver session already open")]
    AlreadyOpen,
}

/// Why a single path could not be turned into a link
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("filespace name not set")]
    MissingFilespace,
    #[error("bad request, daemon could not resolve path")]
    NotResolvable,
    #[error("HTTP status {0}")]
    HttpStatus(StatusCode),
    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ResolveError {
    /// Whether the failure is expected for some paths rather than a fault
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            ResolveError::NotResolvable | ResolveError::MissingField("result")
        )
    }
}
