use std::sync::Arc;

use zealous_core::routes::RouteTable;
use zealous_events::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Nothing in it is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including the business profile.
    pub config: Arc<ServerConfig>,
    /// Pages served by the site.
    pub routes: Arc<RouteTable>,
    /// Outbound mail capability.
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(config: ServerConfig, routes: RouteTable, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            config: Arc::new(config),
            routes: Arc::new(routes),
            mailer,
        }
    }
}
