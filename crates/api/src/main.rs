use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use zealous_core::routes::RouteTable;
use zealous_events::{DisabledMailer, EmailConfig, Mailer, SmtpMailer};

use zealous_api::config::ServerConfig;
use zealous_api::router::build_app_router;
use zealous_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    zealous_api::init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    // --- Mail ---
    let mailer: Arc<dyn Mailer> = match EmailConfig::from_env()? {
        Some(email) => {
            tracing::info!(server = %email.server, port = email.port, tls = email.use_tls, "SMTP mailer configured");
            Arc::new(SmtpMailer::new(&email)?)
        }
        None => {
            tracing::warn!("MAIL_SERVER is not set, form submissions will fail");
            Arc::new(DisabledMailer)
        }
    };

    // --- Router ---
    let addr = SocketAddr::new(
        config.host.parse().context("HOST is not a valid IP address")?,
        config.port,
    );
    let state = AppState::new(config, RouteTable::site(), mailer);
    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
