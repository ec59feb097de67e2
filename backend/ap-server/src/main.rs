use ap_broadcast::ScheduledBroadcastRunner;
use ap_config::Config;
use ap_server::{AppState, Result as ServerErrorResult, ServerError, ShutdownCoordinator, logger};

use std::time::Duration;

use log::{error, info};
use metrics_exporter_prometheus::PrometheusBuilder;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // The logger may not be up yet
        eprintln!("Server error: {}", e);
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> ServerErrorResult<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting ap-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    let pool = ap_db::create_pool(&config.database_path()?).await?;
    let state = AppState::from_config(pool.clone(), &config, prometheus)?;

    let shutdown = ShutdownCoordinator::new();

    let scheduler = if config.broadcast.scheduler_interval_secs > 0 {
        let runner = ScheduledBroadcastRunner::new(
            state.broadcasts.clone(),
            Duration::from_secs(config.broadcast.scheduler_interval_secs),
        );
        Some(tokio::spawn(runner.run(shutdown.subscribe())))
    } else {
        info!("Scheduled broadcast runner disabled");
        None
    };

    let app = ap_server::build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    let signal_shutdown = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received Ctrl+C, shutting down"),
                Err(e) => error!("Failed to listen for shutdown signal: {}", e),
            }
            signal_shutdown.shutdown();
        })
        .await?;

    if let Some(handle) = scheduler
        && let Err(e) = handle.await
    {
        error!("Scheduled broadcast runner stopped abnormally: {}", e);
    }

    pool.close().await;
    info!("Server stopped");

    Ok(())
}
