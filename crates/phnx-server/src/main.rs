//! PhnxByte generation service.
//!
//! Exposes the OpenAPI → TypeScript generator over HTTP: `POST
//! /api/generate` with a raw spec or a spec URL, plus `GET /health`.

use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;

mod api;
mod error;
mod logging;

use logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "phnx-server", about = "PhnxByte generation service", version)]
struct Cli {
    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:8787", env = "PHNX_LISTEN")]
    listen: SocketAddr,

    /// Log level filter.
    #[arg(long, default_value = "info", env = "PHNX_LOG_LEVEL")]
    log_level: String,

    /// Log output format (json or pretty).
    #[arg(long, default_value = "pretty", env = "PHNX_LOG_FORMAT")]
    log_format: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = match LogFormat::parse(&cli.log_format) {
        Some(f) => f,
        None => {
            eprintln!("error: invalid log format: {}", cli.log_format);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = logging::init_logging(&cli.log_level, format) {
        eprintln!("error: failed to initialize logging: {e}");
        return ExitCode::from(1);
    }

    let http = match api::build_http_client() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            return ExitCode::from(1);
        }
    };

    let app = api::create_router(http);

    let listener = match tokio::net::TcpListener::bind(cli.listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %cli.listen, error = %e, "failed to bind");
            return ExitCode::from(1);
        }
    };

    tracing::info!(addr = %cli.listen, "phnx-server listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
