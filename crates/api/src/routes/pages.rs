//! One GET route per [`RouteEntry`](zealous_core::routes::RouteEntry).

use axum::routing::get;
use axum::Router;
use zealous_core::routes::RouteTable;

use crate::handlers::pages;
use crate::state::AppState;

pub fn router(routes: &RouteTable) -> Router<AppState> {
    routes.entries().iter().fold(Router::new(), |router, entry| {
        let template_id = entry.template_id;
        router.route(
            entry.logical_path,
            get(move || pages::render_page(template_id)),
        )
    })
}
