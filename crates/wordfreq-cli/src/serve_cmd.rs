use std::process::ExitCode;

use tracing::info;

use crate::cli::ServeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS};
use crate::server::{ServerConfig, run_server};

pub fn run_serve(args: ServeArgs) -> CliResult<ExitCode> {
    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    info!(host = %config.host, port = config.port, "Starting server");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to start async runtime: {}", e)))?;

    runtime
        .block_on(run_server(config))
        .map_err(|e| CliError::runtime(format!("{:#}", e)))?;

    Ok(ExitCode::from(EXIT_SUCCESS))
}
