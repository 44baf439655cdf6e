use crate::api::{DirectLinkRequest, FsEntryRequest};
use crate::client::Transport;
use crate::config::{ApiVersion, ResolverConfig};
use crate::error::ResolveError;
use crate::link::DirectLink;
use crate::session::Session;

/// The request/response protocol picked at construction time.
///
/// Each variant knows which endpoint to call and how to read its answer;
/// the gate, retries and path handling live in [`Session`] and
/// [`crate::path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialect {
    V2 { filespace: Option<String> },
    V3,
}

impl Dialect {
    pub fn from_config(config: &ResolverConfig) -> Self {
        match config.version {
            ApiVersion::V2 => Dialect::V2 {
                filespace: config.filespace.clone(),
            },
            ApiVersion::V3 => Dialect::V3,
        }
    }

    pub fn version(&self) -> ApiVersion {
        match self {
            Dialect::V2 { .. } => ApiVersion::V2,
            Dialect::V3 => ApiVersion::V3,
        }
    }

    /// Whether resolving with this entry id needs the daemon at all
    pub fn needs_network(&self, entry_id: Option<&str>) -> bool {
        !matches!((self, entry_id), (Dialect::V2 { .. }, Some(_)))
    }

    /// Resolves `relative_path`, going to the daemon only when needed.
    ///
    /// `entry_id` is only meaningful for v2, where it short-circuits the
    /// lookup entirely. v3 always asks the daemon.
    pub async fn resolve<T: Transport>(
        &self,
        session: &Session<T>,
        relative_path: &str,
        entry_id: Option<&str>,
    ) -> Result<DirectLink, ResolveError> {
        match self {
            Dialect::V2 { filespace } => {
                let filespace = filespace.as_deref().ok_or(ResolveError::MissingFilespace)?;

                if let Some(entry_id) = entry_id {
                    let link = DirectLink::from_entry_id(filespace, entry_id);
                    tracing::debug!(%link, "built v2 direct link from provided entry id");
                    return Ok(link);
                }

                let request = FsEntryRequest {
                    path: relative_path.to_string(),
                };
                let response = session.fetch(&request).await?;
                let entry_id = response.id.ok_or(ResolveError::MissingField("id"))?;

                let link = DirectLink::from_entry_id(filespace, &entry_id);
                tracing::debug!(%link, "built v2 direct link from daemon entry id");
                Ok(link)
            }
            Dialect::V3 => {
                let request = DirectLinkRequest {
                    path: relative_path.to_string(),
                };
                let response = session.fetch(&request).await?;
                response
                    .result
                    .map(DirectLink::from)
                    .ok_or(ResolveError::MissingField("result"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = ResolverConfig::new(8280, "/mnt")
            .with_version(ApiVersion::V2)
            .with_filespace("myfilespace");
        assert_eq!(
            Dialect::from_config(&config),
            Dialect::V2 {
                filespace: Some("myfilespace".to_string())
            }
        );

        let config = ResolverConfig::new(8280, "/mnt").with_filespace("ignored");
        assert_eq!(Dialect::from_config(&config), Dialect::V3);
        assert_eq!(Dialect::V3.version(), ApiVersion::V3);
    }

    #[test]
    fn test_needs_network() {
        let v2 = Dialect::V2 { filespace: None };
        assert!(!v2.needs_network(Some("id")));
        assert!(v2.needs_network(None));
        assert!(Dialect::V3.needs_network(Some("id")));
        assert!(Dialect::V3.needs_network(None));
    }
}
