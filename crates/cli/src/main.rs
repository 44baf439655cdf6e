mod args;
mod logging;
mod op;
mod ops;
mod state;

use std::process::ExitCode;

use args::Args;
use clap::{Parser, Subcommand};
use op::Op;
use ops::{Init, Resolve, Version};

command_enum! {
    (Init, Init),
    (Resolve, Resolve),
    (Version, Version),
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // keep the guard alive until output is flushed
    let log_guard = logging::init_logging(args.log_level);
    let ctx = op::OpContext::new(args.config_path);

    let code = match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    };

    drop(log_guard);
    code
}
