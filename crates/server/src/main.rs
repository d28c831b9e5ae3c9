use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    server::telemetry::init_logging();

    let config = server::config::load_config();
    if config.features.telemetry {
        server::telemetry::init_telemetry();
    }
    server::health::record_start_time();

    let state = server::AppState::new(&config.site.data_dir, &config.site.images_dir);
    let mut router = server::app_router(state);
    if config.features.telemetry {
        router = router.layer(server::telemetry::OtelTraceLayer);
    }

    let addr = server::config::listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "League Teams Viewer listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
