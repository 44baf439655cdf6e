use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lucid-links", version)]
#[command(about = "Resolve paths in a mounted LucidLink filespace into direct links")]
pub struct Args {
    /// Path to the config directory (defaults to ~/.lucid-links)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: crate::Command,
}
