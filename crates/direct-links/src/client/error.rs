#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl TransportError {
    /// Sorts a reqwest failure into connect / timeout / other
    pub fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Request(err)
        }
    }
}
