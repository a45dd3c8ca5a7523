//! Mail delivery channels.
//!
//! Handlers only see the [`Mailer`] trait; the binary decides at startup
//! whether that is a real SMTP transport or the [`DisabledMailer`].

pub mod email;

use async_trait::async_trait;
use zealous_core::compose::OutboundMessage;

use email::EmailError;

/// Capability to send one composed message.
///
/// Implementations must not retry; a failure is reported to the caller, who
/// decides whether the rest of a submission's messages are sent.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<(), EmailError>;
}

/// Mailer used when no SMTP server is configured.
///
/// Every send fails, so form submissions answer with an error instead of
/// silently dropping the visitor's request.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), EmailError> {
        tracing::warn!(subject = %message.subject, "Mail delivery is not configured, message dropped");
        Err(EmailError::NotConfigured)
    }
}
