//! Outbound notification delivery for the Zealous Solutions site.
//!
//! - [`Mailer`] — the send capability handlers depend on.
//! - [`SmtpMailer`] — SMTP delivery via `lettre`.
//! - [`DisabledMailer`] — stand-in when no mail server is configured.
//! - [`EmailConfig`] — SMTP settings loaded from the environment.

pub mod delivery;

pub use delivery::email::{EmailConfig, EmailError, SmtpMailer};
pub use delivery::{DisabledMailer, Mailer};
