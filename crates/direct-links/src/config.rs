use std::fmt;
use std::time::Duration;

/// Host the filespace daemon binds its local API to
pub const API_HOST: &str = "127.0.0.1";

pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 10;
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 5;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Which dialect of the daemon's local API to speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// `GET /fsEntry`, links synthesized from the returned entry id
    V2,
    /// `GET /fsEntry/direct-link`, links returned by the daemon
    #[default]
    V3,
}

impl TryFrom<u8> for ApiVersion {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ApiVersion::V2),
            3 => Ok(ApiVersion::V3),
            other => Err(ConfigError::UnsupportedVersion(other)),
        }
    }
}

impl From<ApiVersion> for u8 {
    fn from(version: ApiVersion) -> Self {
        match version {
            ApiVersion::V2 => 2,
            ApiVersion::V3 => 3,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", u8::from(*self))
    }
}

/// Construction-time settings for a [`crate::LinkResolver`].
///
/// Built with [`ResolverConfig::new`] and refined with the `with_*`
/// methods. Validation happens once, when the resolver is created.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Port of the daemon's local API
    pub port: u16,
    /// Local prefix the filespace is mounted under, without trailing `/`
    pub mount_point: String,
    pub version: ApiVersion,
    /// Upper bound on in-flight requests to the daemon
    pub max_concurrent_requests: usize,
    /// Total attempts per request, including the first one
    pub retry_attempts: u32,
    pub retry_delay: Duration,
    /// Filespace name, required to build v2 links
    pub filespace: Option<String>,
    /// Per-request timeout; `None` leaves it to the HTTP client
    pub request_timeout: Option<Duration>,
}

impl ResolverConfig {
    pub fn new(port: u16, mount_point: impl Into<String>) -> Self {
        let mount_point: String = mount_point.into();
        Self {
            port,
            mount_point: mount_point.trim_end_matches('/').to_string(),
            version: ApiVersion::default(),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            filespace: None,
            request_timeout: None,
        }
    }

    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_max_concurrent_requests(mut self, max: usize) -> Self {
        self.max_concurrent_requests = max;
        self
    }

    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_filespace(mut self, filespace: impl Into<String>) -> Self {
        self.filespace = Some(filespace.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Base URL of the daemon's local API
    pub fn api_base(&self) -> String {
        format!("http://{}:{}", API_HOST, self.port)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.retry_attempts == 0 {
            return Err(ConfigError::ZeroRetryAttempts);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported API version {0}, expected 2 or 3")]
    UnsupportedVersion(u8),
    #[error("max concurrent requests must be at least 1")]
    ZeroConcurrency,
    #[error("retry attempts must be at least 1")]
    ZeroRetryAttempts,
}
