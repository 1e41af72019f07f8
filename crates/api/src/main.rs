use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use estudio12_api::config::ServerConfig;
use estudio12_api::router::build_app_router;
use estudio12_api::sessions::SessionStore;
use estudio12_api::state::{AppState, Dictionaries};
use estudio12_content::{CmsClient, ContentProvider};
use estudio12_core::whatsapp::TracingOpener;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estudio12_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Locale dictionaries ---
    let dictionaries = Dictionaries::load().expect("Failed to load locale dictionaries");
    tracing::info!("Locale dictionaries loaded");

    // --- Content provider ---
    let content = match &config.prismic_api_url {
        Some(url) => {
            tracing::info!(%url, "CMS configured");
            ContentProvider::new(Some(CmsClient::new(url.clone())))
        }
        None => {
            tracing::warn!("PRISMIC_API_URL not set, serving fallback content only");
            ContentProvider::fallback_only()
        }
    };

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        dictionaries: Arc::new(dictionaries),
        content: Arc::new(content),
        sessions: Arc::new(SessionStore::new()),
        opener: Arc::new(TracingOpener),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // In-memory wizard sessions are deliberately discarded on shutdown:
    // a booking attempt has no durable record.
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
