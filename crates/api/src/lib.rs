//! Zealous Solutions web server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, page
//! rendering, static export) so integration tests, the server binary and the
//! exporter binary can all access them.

pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod pages;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

/// Install the `tracing` subscriber shared by both binaries.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zealous_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
