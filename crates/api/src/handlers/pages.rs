//! Handlers for rendered HTML pages and the error pages.

use std::any::Any;

use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::pages;

/// Render the page template `template_id`.
///
/// A template the renderer does not know is a server error: it answers with
/// the 500 page.
pub async fn render_page(template_id: &'static str) -> Response {
    match pages::render(template_id) {
        Ok(markup) => Html(markup.into_string()).into_response(),
        Err(err) => {
            tracing::error!(template_id, error = %err, "Failed to render page");
            server_error_page()
        }
    }
}

/// Fallback for every path without a route.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route for path");
    (
        StatusCode::NOT_FOUND,
        Html(pages::errors::not_found().into_string()),
    )
        .into_response()
}

/// Response for a handler that panicked.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(panic = %detail, "Handler panicked");
    server_error_page()
}

fn server_error_page() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(pages::errors::server_error().into_string()),
    )
        .into_response()
}
