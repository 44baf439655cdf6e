use clap::Args;
use futures::future::join_all;
use serde::Serialize;

use direct_links::{ConfigError, DirectLink, LinkResolver, OpenError, SessionError};

use crate::state::{AppConfig, StateError};

#[derive(Args, Debug, Clone)]
pub struct Resolve {
    /// Absolute paths inside the mounted filespace
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Known file-system-entry id, skips the daemon lookup (v2, single path only)
    #[arg(long)]
    pub entry_id: Option<String>,

    /// Override the configured API port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the configured mount point
    #[arg(long)]
    pub mount_point: Option<String>,

    /// Override the configured API dialect
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
    pub api_version: Option<u8>,

    /// Override the configured filespace name
    #[arg(long)]
    pub filespace: Option<String>,

    /// Override the maximum number of concurrent requests
    #[arg(long)]
    pub max_workers: Option<usize>,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub path: String,
    pub link: Option<DirectLink>,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("--entry-id can only be used with a single path")]
    EntryIdWithManyPaths,
    #[error("config error: {0}")]
    State(#[from] StateError),
    #[error("invalid resolver config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to open resolver: {0}")]
    Open(#[from] OpenError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Resolve {
    /// Layer command line overrides on top of the file config
    fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(mount_point) = &self.mount_point {
            config.mount_point = mount_point.clone();
        }
        if let Some(api_version) = self.api_version {
            config.api_version = api_version;
        }
        if let Some(filespace) = &self.filespace {
            config.filespace = Some(filespace.clone());
        }
        if let Some(max_workers) = self.max_workers {
            config.max_workers = max_workers;
        }
        config
    }

    fn render(&self, resolutions: &[Resolution]) -> Result<String, ResolveError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(resolutions)?);
        }

        let lines: Vec<String> = resolutions
            .iter()
            .map(|r| {
                let link = r.link.as_ref().map(DirectLink::as_str).unwrap_or("-");
                format!("{}\t{}", r.path, link)
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

#[async_trait::async_trait]
impl crate::op::Op for Resolve {
    type Error = ResolveError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        if self.entry_id.is_some() && self.paths.len() > 1 {
            return Err(ResolveError::EntryIdWithManyPaths);
        }

        let state = ctx.load_state()?;
        let config = self.apply_overrides(state.config).resolver_config()?;

        let mut resolver: LinkResolver = LinkResolver::new(config)?;
        resolver.open()?;

        let entry_id = self.entry_id.as_deref();
        let links = join_all(
            self.paths
                .iter()
                .map(|path| resolver.resolve(path, entry_id)),
        )
        .await;

        let mut resolutions = Vec::with_capacity(self.paths.len());
        for (path, link) in self.paths.iter().zip(links) {
            resolutions.push(Resolution {
                path: path.clone(),
                link: link?,
            });
        }
        resolver.close();

        let resolved = resolutions.iter().filter(|r| r.link.is_some()).count();
        tracing::info!(
            resolved,
            unresolved = resolutions.len() - resolved,
            "finished resolving direct links"
        );

        self.render(&resolutions)
    }
}
