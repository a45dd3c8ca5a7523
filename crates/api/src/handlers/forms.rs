//! Handlers for the quote and contact forms.
//!
//! Each submission runs validate -> compose -> send. Messages are sent one
//! at a time in composition order and the first delivery failure aborts the
//! rest; nothing is retried or queued.

use std::collections::HashMap;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::{Form, Json};
use chrono::Local;
use zealous_core::compose::{compose_contact, compose_quote};
use zealous_core::forms::{validate_contact, validate_quote};

use crate::error::{FormError, FormKind, FormResult};
use crate::response::{FormResponse, CONTACT_SUCCESS_MESSAGE, QUOTE_SUCCESS_MESSAGE};
use crate::state::AppState;

/// Posted fields, or an empty mapping when the body could not be decoded.
///
/// An undecodable body then fails validation like an empty form.
fn posted_fields(
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> HashMap<String, String> {
    match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable form body");
            HashMap::new()
        }
    }
}

/// A posted value as submitted, or `""` when absent. Used for log context.
fn raw_field<'a>(fields: &'a HashMap<String, String>, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

// ---------------------------------------------------------------------------
// POST /submit-quote, POST /api/contact
// ---------------------------------------------------------------------------

/// Handle a quote request: alert the business, then confirm to the client.
pub async fn submit_quote(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> FormResult<Json<FormResponse>> {
    let fields = posted_fields(form);
    let quote = validate_quote(&fields).inspect_err(|missing| {
        tracing::warn!(
            %missing,
            email = raw_field(&fields, "email"),
            company = raw_field(&fields, "company"),
            "Quote request rejected",
        );
    })?;

    let notifications = compose_quote(&quote, &state.config.business, Local::now().naive_local());

    for message in notifications.in_send_order() {
        if let Err(source) = state.mailer.send(message).await {
            tracing::error!(
                error = %source,
                email = %quote.email,
                company = %quote.company,
                subject = %message.subject,
                "Error processing quote request",
            );
            return Err(FormError::Delivery {
                kind: FormKind::Quote,
                source,
            });
        }
    }

    tracing::info!(
        email = %quote.email,
        company = %quote.company,
        "Quote request submitted",
    );

    Ok(Json(FormResponse::success(QUOTE_SUCCESS_MESSAGE)))
}

// ---------------------------------------------------------------------------
// POST /submit-contact
// ---------------------------------------------------------------------------

/// Handle a general contact message: alert the business only.
pub async fn submit_contact(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> FormResult<Json<FormResponse>> {
    let fields = posted_fields(form);
    let contact = validate_contact(&fields).inspect_err(|missing| {
        tracing::warn!(
            %missing,
            email = raw_field(&fields, "email"),
            company = raw_field(&fields, "company"),
            "Contact form rejected",
        );
    })?;

    let message = compose_contact(
        &contact,
        &state.config.business,
        Local::now().naive_local(),
    );

    if let Err(source) = state.mailer.send(&message).await {
        tracing::error!(
            error = %source,
            email = %contact.email,
            "Error processing contact form",
        );
        return Err(FormError::Delivery {
            kind: FormKind::Contact,
            source,
        });
    }

    tracing::info!(email = %contact.email, "Contact form submitted");

    Ok(Json(FormResponse::success(CONTACT_SUCCESS_MESSAGE)))
}
