use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use zealous_core::forms::{MissingFields, REQUIRED_FIELDS_MESSAGE};
use zealous_events::EmailError;

use crate::response::{FormResponse, CONTACT_FAILURE_MESSAGE, QUOTE_FAILURE_MESSAGE};

/// Which submission endpoint produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Quote,
    Contact,
}

impl FormKind {
    /// Message shown to the visitor when delivery fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            FormKind::Quote => QUOTE_FAILURE_MESSAGE,
            FormKind::Contact => CONTACT_FAILURE_MESSAGE,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Quote => f.write_str("quote"),
            FormKind::Contact => f.write_str("contact"),
        }
    }
}

/// Error type for the submission handlers.
///
/// Implements [`IntoResponse`] with the fixed `{success, message}` envelope.
/// Neither variant exposes its detail to the client; handlers log the detail
/// together with the submitter before returning.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Required fields were empty.
    #[error(transparent)]
    Validation(#[from] MissingFields),

    /// The mailer rejected one of the submission's messages.
    #[error("{kind} notification could not be sent: {source}")]
    Delivery {
        kind: FormKind,
        #[source]
        source: EmailError,
    },
}

/// Convenience type alias for submission handler return values.
pub type FormResult<T> = Result<T, FormError>;

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            FormError::Validation(_) => (StatusCode::BAD_REQUEST, REQUIRED_FIELDS_MESSAGE),
            FormError::Delivery { kind, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, kind.failure_message())
            }
        };

        (status, Json(FormResponse::failure(message))).into_response()
    }
}
