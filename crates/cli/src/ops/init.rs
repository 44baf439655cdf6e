use clap::Args;

use crate::state::{AppConfig, AppState};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Port of the filespace daemon's local API
    #[arg(long, default_value_t = 8280)]
    pub port: u16,

    /// Where the filespace is mounted locally
    #[arg(long, default_value = "/Volumes/filespace")]
    pub mount_point: String,

    /// API dialect to speak
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=3))]
    pub api_version: u8,

    /// Filespace name, required for v2 links
    #[arg(long)]
    pub filespace: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = AppConfig {
            port: self.port,
            mount_point: self.mount_point.clone(),
            api_version: self.api_version,
            filespace: self.filespace.clone(),
            ..Default::default()
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        let filespace_str = state
            .config
            .filespace
            .as_deref()
            .unwrap_or("not set (required for v2)");

        let output = format!(
            "Initialized config at: {}\n\
             - Directory: {}\n\
             - API port: {}\n\
             - Mount point: {}\n\
             - API version: {}\n\
             - Filespace: {}",
            state.config_path.display(),
            state.config_dir.display(),
            state.config.port,
            state.config.mount_point,
            state.config.api_version,
            filespace_str
        );

        Ok(output)
    }
}
