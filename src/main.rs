//! Server binary: loads settings, opens the MySQL pool, serves the park routes until shutdown.

use parks_finder::{app, AppState, NpsClient};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("parks_finder=info,tower_http=info")),
        )
        .init();

    let settings = parks_finder::load().await?;
    tracing::debug!(?settings, "settings loaded");
    if settings.nps.api_key.is_empty() {
        tracing::warn!("NPS_API_KEY is not set; /parkdetails requests will be rejected upstream");
    }

    let pool = sqlx::mysql::MySqlPoolOptions::new()
        .max_connections(5)
        .connect_with(settings.database.connect_options()?)
        .await?;

    let state = AppState {
        pool: pool.clone(),
        nps: NpsClient::new(&settings.nps),
    };
    let router = app(state, &settings.server);

    let listener = TcpListener::bind(settings.server.socket_addr()).await?;
    tracing::info!("Server running at http://{}/", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
