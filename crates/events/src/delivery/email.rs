//! E-mail delivery via SMTP.
//!
//! [`SmtpMailer`] wraps the `lettre` async SMTP transport to send the
//! plain-text notifications composed for form submissions. Configuration is
//! loaded from environment variables; if `MAIL_SERVER` is not set,
//! [`EmailConfig::from_env`] returns `Ok(None)` and the caller should fall
//! back to [`DisabledMailer`](super::DisabledMailer).

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use zealous_core::compose::OutboundMessage;

use super::Mailer;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for e-mail delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// No mail server is configured for this process.
    #[error("Mail delivery is not configured")]
    NotConfigured,

    /// A mail setting was present but malformed.
    #[error("Invalid mail configuration: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration for the SMTP mailer.
#[derive(Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub server: String,
    /// SMTP server port (defaults to 587).
    pub port: u16,
    /// Upgrade the connection with STARTTLS (defaults to `true`).
    pub use_tls: bool,
    /// Optional SMTP username.
    pub username: Option<String>,
    /// Optional SMTP password.
    pub password: Option<String>,
    /// RFC 5322 "From" address.
    pub default_sender: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("use_tls", &self.use_tls)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("default_sender", &self.default_sender)
            .finish()
    }
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `Ok(None)` if `MAIL_SERVER` is not set.
    ///
    /// | Variable              | Required | Default              |
    /// |-----------------------|----------|----------------------|
    /// | `MAIL_SERVER`         | yes      | —                    |
    /// | `MAIL_PORT`           | no       | `587`                |
    /// | `MAIL_USE_TLS`        | no       | `true`               |
    /// | `MAIL_USERNAME`       | no       | —                    |
    /// | `MAIL_PASSWORD`       | no       | —                    |
    /// | `MAIL_DEFAULT_SENDER` | no*      | `MAIL_USERNAME`      |
    ///
    /// *One of `MAIL_DEFAULT_SENDER` or `MAIL_USERNAME` must be set.
    pub fn from_env() -> Result<Option<Self>, EmailError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>, EmailError> {
        let Some(server) = lookup("MAIL_SERVER").filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        let port = match lookup("MAIL_PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| EmailError::Config(format!("MAIL_PORT '{p}' is not a valid port")))?,
            None => DEFAULT_SMTP_PORT,
        };

        let use_tls = match lookup("MAIL_USE_TLS") {
            Some(v) => parse_bool(&v).ok_or_else(|| {
                EmailError::Config(format!("MAIL_USE_TLS '{v}' is not a boolean"))
            })?,
            None => true,
        };

        let username = lookup("MAIL_USERNAME");
        let default_sender = lookup("MAIL_DEFAULT_SENDER")
            .or_else(|| username.clone())
            .ok_or_else(|| {
                EmailError::Config("MAIL_DEFAULT_SENDER or MAIL_USERNAME must be set".into())
            })?;

        Ok(Some(Self {
            server: server.trim().to_string(),
            port,
            use_tls,
            username,
            password: lookup("MAIL_PASSWORD"),
            default_sender,
        }))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// SmtpMailer
// ---------------------------------------------------------------------------

/// Sends composed notifications through an SMTP relay.
pub struct SmtpMailer {
    sender: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the transport for `config`. No connection is opened until the
    /// first send.
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let sender: Mailbox = config.default_sender.parse()?;

        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.server)
        };
        let mut builder = builder.port(config.port);

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            sender,
            transport: builder.build(),
        })
    }
}

/// Assemble the MIME message for `message`, sent from `sender`.
fn build_message(sender: &Mailbox, message: &OutboundMessage) -> Result<Message, EmailError> {
    if message.recipients.is_empty() {
        return Err(EmailError::Build("message has no recipients".into()));
    }

    let mut builder = Message::builder()
        .from(sender.clone())
        .subject(message.subject.clone())
        .header(ContentType::TEXT_PLAIN);
    for recipient in &message.recipients {
        builder = builder.to(recipient.parse()?);
    }

    builder
        .body(message.body.clone())
        .map_err(|e| EmailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), EmailError> {
        let email = build_message(&self.sender, message)?;
        self.transport.send(email).await?;

        tracing::info!(
            recipients = message.recipients.len(),
            subject = %message.subject,
            "Notification email sent",
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn none_without_mail_server() {
        let config = EmailConfig::from_lookup(lookup(&[("MAIL_PORT", "25")])).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn defaults_apply() {
        let config = EmailConfig::from_lookup(lookup(&[
            ("MAIL_SERVER", "smtp.example.com"),
            ("MAIL_USERNAME", "site@example.com"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.port, 587);
        assert!(config.use_tls);
        assert_eq!(config.default_sender, "site@example.com");
        assert!(config.password.is_none());
    }

    #[test]
    fn explicit_values_are_parsed() {
        let config = EmailConfig::from_lookup(lookup(&[
            ("MAIL_SERVER", "mail.local"),
            ("MAIL_PORT", "2525"),
            ("MAIL_USE_TLS", "False"),
            ("MAIL_DEFAULT_SENDER", "Zealous <noreply@example.com>"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.port, 2525);
        assert!(!config.use_tls);
        assert_eq!(config.default_sender, "Zealous <noreply@example.com>");
    }

    #[test]
    fn bad_port_is_a_config_error() {
        let result = EmailConfig::from_lookup(lookup(&[
            ("MAIL_SERVER", "mail.local"),
            ("MAIL_PORT", "smtp"),
            ("MAIL_USERNAME", "a@example.com"),
        ]));
        assert_matches!(result, Err(EmailError::Config(_)));
    }

    #[test]
    fn sender_is_required() {
        let result = EmailConfig::from_lookup(lookup(&[("MAIL_SERVER", "mail.local")]));
        assert_matches!(result, Err(EmailError::Config(_)));
    }

    #[test]
    fn debug_redacts_password() {
        let config = EmailConfig::from_lookup(lookup(&[
            ("MAIL_SERVER", "mail.local"),
            ("MAIL_USERNAME", "a@example.com"),
            ("MAIL_PASSWORD", "hunter2"),
        ]))
        .unwrap()
        .unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn message_is_addressed_to_every_recipient() {
        let sender: Mailbox = "site@example.com".parse().unwrap();
        let msg = OutboundMessage::new(["a@example.com", "b@example.com"], "Subject", "Body");
        let email = build_message(&sender, &msg).unwrap();
        let to: Vec<String> = email
            .envelope()
            .to()
            .iter()
            .map(|a| a.to_string())
            .collect();
        assert_eq!(to, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn invalid_recipient_is_an_address_error() {
        let sender: Mailbox = "site@example.com".parse().unwrap();
        let msg = OutboundMessage::new(["not-an-email"], "Subject", "Body");
        assert_matches!(build_message(&sender, &msg), Err(EmailError::Address(_)));
    }

    #[test]
    fn empty_recipients_is_a_build_error() {
        let sender: Mailbox = "site@example.com".parse().unwrap();
        let msg = OutboundMessage::new(Vec::<String>::new(), "Subject", "Body");
        assert_matches!(build_message(&sender, &msg), Err(EmailError::Build(_)));
    }

    #[test]
    fn email_error_display_build() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }
}
