//! Notification e-mail composition.
//!
//! Builds the outbound messages for a validated submission. Nothing is sent
//! here; the caller hands each [`OutboundMessage`] to a mailer. The
//! submission time is passed in so composition stays deterministic.

use chrono::NaiveDateTime;

use crate::forms::{ContactSubmission, QuoteSubmission};

/// Timestamp format used in notification bodies.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default business notification addresses.
pub const DEFAULT_RECIPIENTS: &[&str] = &["Obsyed1217@gmail.com", "info@zealous-solutions.com"];

/// An e-mail ready to be handed to a mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Ordered, duplicate-free recipient addresses.
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl OutboundMessage {
    pub fn new(
        recipients: impl IntoIterator<Item = impl Into<String>>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for r in recipients {
            let r = r.into();
            if !unique.contains(&r) {
                unique.push(r);
            }
        }
        Self {
            recipients: unique,
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Company details used in notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessProfile {
    pub name: String,
    /// Addresses that receive every submission.
    pub recipients: Vec<String>,
    pub phone: String,
    pub website: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "Zealous Solutions".to_string(),
            recipients: DEFAULT_RECIPIENTS.iter().map(|s| s.to_string()).collect(),
            phone: "+923070088630".to_string(),
            website: "www.Z4zealous.com".to_string(),
        }
    }
}

/// The two messages produced for a quote request, in send order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteNotifications {
    /// Alert to the business notification list.
    pub internal: OutboundMessage,
    /// Thank-you note to the submitter.
    pub confirmation: OutboundMessage,
}

impl QuoteNotifications {
    pub fn in_send_order(&self) -> [&OutboundMessage; 2] {
        [&self.internal, &self.confirmation]
    }
}

/// Compose the business alert and the client confirmation for a quote.
pub fn compose_quote(
    quote: &QuoteSubmission,
    business: &BusinessProfile,
    submitted_at: NaiveDateTime,
) -> QuoteNotifications {
    let internal_body = format!(
        "New Quote Request - {company_name}\n\
         \n\
         Contact Information:\n\
         - Name: {first} {last}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\
         - Company: {company}\n\
         - Service Interest: {service}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         Submitted: {at}\n",
        company_name = business.name,
        first = quote.first_name,
        last = quote.last_name,
        email = quote.email,
        phone = quote.phone,
        company = quote.company,
        service = quote.service,
        message = quote.message,
        at = submitted_at.format(TIMESTAMP_FORMAT),
    );

    let internal = OutboundMessage::new(
        business.recipients.iter().cloned(),
        format!(
            "New Quote Request from {} {}",
            quote.first_name, quote.last_name
        ),
        internal_body,
    );

    let confirmation_body = format!(
        "Dear {first},\n\
         \n\
         Thank you for your interest in {company_name} call centre services!\n\
         \n\
         We have received your quote request and will get back to you within 24 hours.\n\
         \n\
         Your request details:\n\
         - Service: {service}\n\
         - Company: {company}\n\
         \n\
         Best regards,\n\
         {company_name} Team\n\
         Phone: {phone}\n\
         Website: {website}\n",
        first = quote.first_name,
        company_name = business.name,
        service = quote.service,
        company = quote.company,
        phone = business.phone,
        website = business.website,
    );

    let confirmation = OutboundMessage::new(
        [quote.email.clone()],
        format!("Thank you for contacting {}", business.name),
        confirmation_body,
    );

    QuoteNotifications {
        internal,
        confirmation,
    }
}

/// Compose the business alert for a general contact message.
pub fn compose_contact(
    contact: &ContactSubmission,
    business: &BusinessProfile,
    submitted_at: NaiveDateTime,
) -> OutboundMessage {
    let subject = if contact.subject.is_empty() {
        format!("Contact from {}", contact.name)
    } else {
        format!("Contact Form: {}", contact.subject)
    };

    let body = format!(
        "New Contact Message - {company_name}\n\
         \n\
         Contact Information:\n\
         - Name: {name}\n\
         - Email: {email}\n\
         - Phone: {phone}\n\
         - Subject: {subject}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         Submitted: {at}\n",
        company_name = business.name,
        name = contact.name,
        email = contact.email,
        phone = contact.phone,
        subject = contact.subject,
        message = contact.message,
        at = submitted_at.format(TIMESTAMP_FORMAT),
    );

    OutboundMessage::new(business.recipients.iter().cloned(), subject, body)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    fn quote() -> QuoteSubmission {
        QuoteSubmission {
            first_name: "Ayesha".into(),
            last_name: "Khan".into(),
            email: "ayesha@example.com".into(),
            phone: "+92 300 1234567".into(),
            company: "Acme Insurance".into(),
            service: "Inbound Call Centre".into(),
            message: "We need 20 agents.".into(),
        }
    }

    fn contact(subject: &str) -> ContactSubmission {
        ContactSubmission {
            name: "Bilal".into(),
            email: "bilal@example.com".into(),
            phone: "".into(),
            subject: subject.into(),
            message: "Do you offer weekend cover?".into(),
        }
    }

    #[test]
    fn internal_goes_to_both_business_addresses() {
        let n = compose_quote(&quote(), &BusinessProfile::default(), at());
        assert_eq!(n.internal.recipients, DEFAULT_RECIPIENTS);
    }

    #[test]
    fn internal_recipients_ignore_submitter() {
        let mut q = quote();
        q.email = "info@zealous-solutions.com".into();
        let n = compose_quote(&q, &BusinessProfile::default(), at());
        assert_eq!(n.internal.recipients.len(), 2);
    }

    #[test]
    fn internal_subject_and_body() {
        let n = compose_quote(&quote(), &BusinessProfile::default(), at());
        assert_eq!(n.internal.subject, "New Quote Request from Ayesha Khan");
        let body = &n.internal.body;
        assert!(body.contains("- Name: Ayesha Khan\n"));
        assert!(body.contains("- Email: ayesha@example.com\n"));
        assert!(body.contains("- Phone: +92 300 1234567\n"));
        assert!(body.contains("- Company: Acme Insurance\n"));
        assert!(body.contains("- Service Interest: Inbound Call Centre\n"));
        assert!(body.contains("We need 20 agents."));
        assert!(body.contains("Submitted: 2024-03-09 14:05:07"));
    }

    #[test]
    fn confirmation_goes_only_to_submitter() {
        let n = compose_quote(&quote(), &BusinessProfile::default(), at());
        assert_eq!(n.confirmation.recipients, vec!["ayesha@example.com"]);
        assert_eq!(
            n.confirmation.subject,
            "Thank you for contacting Zealous Solutions"
        );
        assert!(n.confirmation.body.starts_with("Dear Ayesha,"));
        assert!(n.confirmation.body.contains("- Service: Inbound Call Centre"));
        assert!(n.confirmation.body.contains("- Company: Acme Insurance"));
        assert!(n.confirmation.body.contains("Phone: +923070088630"));
    }

    #[test]
    fn send_order_is_internal_first() {
        let n = compose_quote(&quote(), &BusinessProfile::default(), at());
        let [first, second] = n.in_send_order();
        assert_eq!(first, &n.internal);
        assert_eq!(second, &n.confirmation);
    }

    #[test]
    fn contact_subject_uses_subject_when_present() {
        let msg = compose_contact(&contact("Pricing"), &BusinessProfile::default(), at());
        assert_eq!(msg.subject, "Contact Form: Pricing");
    }

    #[test]
    fn contact_subject_falls_back_to_name() {
        let msg = compose_contact(&contact(""), &BusinessProfile::default(), at());
        assert_eq!(msg.subject, "Contact from Bilal");
        assert_eq!(msg.recipients, DEFAULT_RECIPIENTS);
        assert!(msg.body.contains("Submitted: 2024-03-09 14:05:07"));
    }

    #[test]
    fn custom_profile_recipients_are_deduplicated() {
        let business = BusinessProfile {
            recipients: vec!["a@example.com".into(), "a@example.com".into()],
            ..BusinessProfile::default()
        };
        let msg = compose_contact(&contact(""), &business, at());
        assert_eq!(msg.recipients, vec!["a@example.com"]);
    }
}
