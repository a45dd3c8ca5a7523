//! Route definitions for the form submission endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::forms;
use crate::state::AppState;

/// Submission routes.
///
/// ```text
/// POST /submit-quote    -> submit_quote
/// POST /api/contact     -> submit_quote (same schema)
/// POST /submit-contact  -> submit_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit-quote", post(forms::submit_quote))
        .route("/api/contact", post(forms::submit_quote))
        .route("/submit-contact", post(forms::submit_contact))
}
