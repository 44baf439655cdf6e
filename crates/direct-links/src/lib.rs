/**
 * Endpoints of the filespace daemon's local API.
 *  - v2: file-system-entry lookup
 *  - v3: ready-made direct links
 */
pub mod api;
/**
 * Transport seam between the resolver and the daemon.
 *  Live requests go through a pooled reqwest client.
 */
pub mod client;
/**
 * Construction-time settings: port, mount point,
 *  API version, concurrency and retry budget.
 */
pub mod config;
pub mod dialect;
pub mod error;
pub mod link;
/**
 * Mount-relative path computation and the
 *  query encoding the daemon expects.
 */
pub mod path;
pub mod resolver;
/**
 * Open connection state: transport, the concurrency
 *  gate, and the retry loop shared by both dialects.
 */
pub mod session;

pub use client::{HttpTransport, Transport, TransportError};
pub use config::{ApiVersion, ConfigError, ResolverConfig};
pub use error::{ResolveError, SessionError};
pub use link::DirectLink;
pub use resolver::{LinkResolver, OpenError};

pub mod prelude {
    pub use crate::config::{ApiVersion, ResolverConfig};
    pub use crate::error::SessionError;
    pub use crate::link::DirectLink;
    pub use crate::resolver::LinkResolver;
}
