use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::cli::ServeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS};
use crate::server::{ServerConfig, router};

pub fn run_serve(args: ServeArgs) -> CliResult<ExitCode> {
    let config = ServerConfig {
        max_text_bytes: args.max_text_bytes,
    };
    let addr = format!("{}:{}", args.host, args.port);

    serve(&addr, config).map_err(|e| CliError::runtime(format!("{e:#}")))?;

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn serve(addr: &str, config: ServerConfig) -> Result<()> {
    let rt = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    rt.block_on(async {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        let local = listener.local_addr().context("Failed to read bound address")?;

        info!(%local, max_text_bytes = config.max_text_bytes, "Serving word frequency API");
        println!("Listening on http://{}", local);

        axum::serve(listener, router(config))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server terminated unexpectedly")?;

        info!("Server stopped");
        Ok::<(), anyhow::Error>(())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C, serving until killed: {e}");
        std::future::pending::<()>().await;
    }
}
