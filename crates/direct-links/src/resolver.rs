use crate::client::{HttpTransport, Transport, TransportError};
use crate::config::{ConfigError, ResolverConfig};
use crate::dialect::Dialect;
use crate::error::{ResolveError, SessionError};
use crate::link::DirectLink;
use crate::path::relative_path;
use crate::session::Session;

enum SessionState<T> {
    Unopened,
    Open(Session<T>),
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to build HTTP client: {0}")]
    Transport(#[from] TransportError),
}

/// Resolves paths inside a mounted filespace into direct links.
///
/// The resolver must be opened before use and is closed either explicitly
/// with [`LinkResolver::close`] or when dropped. `resolve` takes `&self`,
/// so many resolutions can be driven concurrently over one session; the
/// session's gate keeps at most `max_concurrent_requests` of them talking
/// to the daemon at a time.
///
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use direct_links::{LinkResolver, ResolverConfig};
///
/// let config = ResolverConfig::new(8280, "/Volumes/filespace");
/// let mut resolver: LinkResolver = LinkResolver::new(config)?;
/// resolver.open()?;
///
/// if let Some(link) = resolver.resolve("/Volumes/filespace/a.txt", None).await? {
///     println!("{link}");
/// }
/// resolver.close();
/// # Ok(())
/// # }
/// ```
pub struct LinkResolver<T: Transport = HttpTransport> {
    config: ResolverConfig,
    dialect: Dialect,
    state: SessionState<T>,
}

impl LinkResolver<HttpTransport> {
    /// Opens a session backed by a pooled HTTP client
    pub fn open(&mut self) -> Result<(), OpenError> {
        self.ensure_unopened()?;
        let transport = HttpTransport::new(&self.config)?;
        self.open_with(transport)?;
        Ok(())
    }
}

impl<T: Transport> LinkResolver<T> {
    pub fn new(config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dialect = Dialect::from_config(&config);

        Ok(Self {
            config,
            dialect,
            state: SessionState::Unopened,
        })
    }

    /// Opens a session over the given transport
    pub fn open_with(&mut self, transport: T) -> Result<(), SessionError> {
        self.ensure_unopened()?;
        self.state = SessionState::Open(Session::new(transport, &self.config));
        tracing::debug!(
            api = %self.config.api_base(),
            version = %self.dialect.version(),
            max_concurrent = self.config.max_concurrent_requests,
            "opened direct link session"
        );
        Ok(())
    }

    /// Releases the session and its pooled connections
    pub fn close(&mut self) {
        if let SessionState::Open(_) = self.state {
            tracing::debug!("closing direct link session");
        }
        self.state = SessionState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open(_))
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves `path` into a direct link.
    ///
    /// Resolution failures are logged and come back as `Ok(None)`. Only
    /// calling this outside an open session is an error.
    #[tracing::instrument(
        skip(self, entry_id),
        fields(version = %self.dialect.version(), network = self.dialect.needs_network(entry_id))
    )]
    pub async fn resolve(
        &self,
        path: &str,
        entry_id: Option<&str>,
    ) -> Result<Option<DirectLink>, SessionError> {
        let session = self.session()?;
        let relative = relative_path(path, &self.config.mount_point);

        match self.dialect.resolve(session, relative, entry_id).await {
            Ok(link) => {
                tracing::debug!(%link, "generated direct link");
                Ok(Some(link))
            }
            Err(e) if e.is_expected() => {
                tracing::warn!(path = relative, error = %e, "failed to generate direct link");
                Ok(None)
            }
            Err(ResolveError::Session(e)) => Err(e),
            Err(e) => {
                tracing::error!(path = relative, error = %e, "error generating direct link");
                Ok(None)
            }
        }
    }

    fn session(&self) -> Result<&Session<T>, SessionError> {
        match &self.state {
            SessionState::Open(session) => Ok(session),
            SessionState::Unopened => Err(SessionError::NotOpen),
            SessionState::Closed => Err(SessionError::Closed),
        }
    }

    fn ensure_unopened(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Unopened => Ok(()),
            SessionState::Open(_) => Err(SessionError::AlreadyOpen),
            SessionState::Closed => Err(SessionError::Closed),
        }
    }
}

impl<T: Transport> Drop for LinkResolver<T> {
    fn drop(&mut self) {
        self.close();
    }
}
