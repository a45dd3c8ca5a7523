//! JSON envelope returned by the form submission endpoints.
//!
//! Every submission answers `{ "success": bool, "message": string }`; the
//! page script shows `message` to the visitor as-is.

use serde::{Deserialize, Serialize};

pub const QUOTE_SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry! We will contact you within 24 hours.";
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for contacting us! We will get back to you soon.";
pub const QUOTE_FAILURE_MESSAGE: &str =
    "Sorry, there was an error processing your request. Please try again.";
pub const CONTACT_FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResponse {
    pub success: bool,
    pub message: String,
}

impl FormResponse {
    pub fn success(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}
