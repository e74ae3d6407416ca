use buildcraft::config::ServerConfig;
use buildcraft::services::catalog;
use buildcraft::{routes, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = ServerConfig::from_env()?;
    let port = config.port;

    // Search answers 500 until this parses; say so up front.
    match catalog::oblivion() {
        Ok(c) => tracing::info!(entries = c.entries.len(), "game catalog loaded"),
        Err(e) => tracing::error!(error = %e, "game catalog unavailable; search disabled"),
    }

    tracing::info!(
        delay = ?config.response_delay,
        default_game = %config.default_game,
        "server configured"
    );
    let app = routes::app(state::AppState::new(config));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "buildcraft listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
