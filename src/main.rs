use std::net::SocketAddr;
use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use products_api::config::LogFormat;
use products_api::{AppState, Config, build_router, metrics, utils};

#[tokio::main]
async fn main() -> ExitCode {
    // Configuration is loaded before logging so LOG_FORMAT can take effect
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing("info", LogFormat::Pretty);
            error!("Configuration error: {e}");
            return ExitCode::from(exitcode::CONFIG as u8);
        }
    };

    init_tracing(&config.log_level, config.log_format);

    info!(
        "Starting Products API v{}",
        env!("CARGO_PKG_VERSION")
    );

    match run(config).await {
        Ok(()) => ExitCode::from(exitcode::OK as u8),
        Err(exit_code) => ExitCode::from(exit_code as u8),
    }
}

/// Install the global tracing subscriber.
fn init_tracing(default_filter: &str, format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init(),
    }
}

/// Run the application, returning an exit code on error.
async fn run(config: Config) -> Result<(), exitcode::ExitCode> {
    info!(
        host = %config.host,
        port = %config.port,
        auth = config.auth_configured(),
        seed = config.seed_products,
        log_format = %config.log_format,
        "Configuration loaded"
    );

    if let Some(metrics_addr) = config.metrics_addr() {
        metrics::init_metrics(metrics_addr).map_err(|e| {
            error!("Failed to start metrics exporter: {e}");
            exitcode::UNAVAILABLE
        })?;
    }

    let addr: SocketAddr = config.server_addr().parse().map_err(|e| {
        error!("Invalid server address: {e}");
        exitcode::CONFIG
    })?;

    let state = AppState::new(config);
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind to {addr}: {e}");
        exitcode::UNAVAILABLE
    })?;

    info!("Server listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET    /                      - Greeting");
    info!("  GET    /health                - Health check");
    info!("  GET    /api/products          - List products (category, page, limit)");
    info!("  GET    /api/products/search   - Search by name");
    info!("  GET    /api/products/stats    - Count by category");
    info!("  GET    /api/products/{{id}}     - Get product");
    info!("  POST   /api/products          - Create product");
    info!("  PUT    /api/products/{{id}}     - Update product");
    info!("  DELETE /api/products/{{id}}     - Delete product");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown_signal())
        .await
        .map_err(|e| {
            error!("Server error: {e}");
            exitcode::SOFTWARE
        })?;

    info!("Server shutdown complete");
    Ok(())
}
