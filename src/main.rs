use dotenvy::dotenv;
use schoolhub::logging::{init_tracing, shutdown_tracer};
use schoolhub::metrics::{init_metrics, metrics_app};
use schoolhub::router::init_router;
use schoolhub::state::init_app_state;
use schoolhub_config::ServerConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let server = ServerConfig::from_env();

    if let Some(handle) = init_metrics() {
        let addr = format!("0.0.0.0:{}", server.metrics_port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind metrics listener");
        info!("Metrics available at http://{}/metrics", addr);
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(init_app_state());

    let addr = format!("0.0.0.0:{}", server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    info!("Server running on http://localhost:{}", server.port);
    info!("Swagger UI available at http://localhost:{}/swagger-ui", server.port);
    info!("Scalar UI available at http://localhost:{}/scalar", server.port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
    }

    shutdown_tracer().await;
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
