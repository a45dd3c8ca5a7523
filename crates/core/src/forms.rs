//! Form submission validation.
//!
//! Turns the raw field mapping of a posted form into a typed submission.
//! Every expected field is read with an empty default and trimmed; a
//! required field is missing when nothing is left after trimming. No format
//! checks are applied to e-mail addresses or phone numbers.

use std::collections::HashMap;

/// Message shown to the visitor whenever a required field is missing.
///
/// Per-field detail is logged but never returned to the client.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Required fields of the quote request form, in form order.
pub const QUOTE_REQUIRED: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "phone",
    "company",
    "service",
];

/// Required fields of the general contact form, in form order.
pub const CONTACT_REQUIRED: &[&str] = &["name", "email", "message"];

/// A validated quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    /// Free text; may be empty.
    pub message: String,
}

/// A validated general contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    /// Optional; empty when not provided.
    pub phone: String,
    /// Optional; empty when not provided.
    pub subject: String,
    pub message: String,
}

/// One or more required fields were empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

/// Trimmed view over a posted field mapping.
struct Fields<'a> {
    raw: &'a HashMap<String, String>,
    missing: Vec<&'static str>,
}

impl<'a> Fields<'a> {
    fn new(raw: &'a HashMap<String, String>) -> Self {
        Self {
            raw,
            missing: Vec::new(),
        }
    }

    fn optional(&self, name: &str) -> String {
        self.raw
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    fn required(&mut self, name: &'static str) -> String {
        let value = self.optional(name);
        if value.is_empty() {
            self.missing.push(name);
        }
        value
    }

    fn finish<T>(self, record: T) -> Result<T, MissingFields> {
        if self.missing.is_empty() {
            Ok(record)
        } else {
            Err(MissingFields(self.missing))
        }
    }
}

/// Validate a quote request form.
pub fn validate_quote(raw: &HashMap<String, String>) -> Result<QuoteSubmission, MissingFields> {
    let mut fields = Fields::new(raw);
    let record = QuoteSubmission {
        first_name: fields.required("first_name"),
        last_name: fields.required("last_name"),
        email: fields.required("email"),
        phone: fields.required("phone"),
        company: fields.required("company"),
        service: fields.required("service"),
        message: fields.optional("message"),
    };
    fields.finish(record)
}

/// Validate a general contact form.
pub fn validate_contact(raw: &HashMap<String, String>) -> Result<ContactSubmission, MissingFields> {
    let mut fields = Fields::new(raw);
    let record = ContactSubmission {
        name: fields.required("name"),
        email: fields.required("email"),
        phone: fields.optional("phone"),
        subject: fields.optional("subject"),
        message: fields.required("message"),
    };
    fields.finish(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_quote() -> HashMap<String, String> {
        form(&[
            ("first_name", "  Ayesha "),
            ("last_name", "Khan"),
            ("email", "ayesha@example.com\n"),
            ("phone", "+92 300 1234567"),
            ("company", "Acme Insurance"),
            ("service", "inbound"),
            ("message", ""),
        ])
    }

    #[test]
    fn quote_with_empty_message_is_accepted() {
        let record = validate_quote(&full_quote()).unwrap();
        assert_eq!(record.first_name, "Ayesha");
        assert_eq!(record.email, "ayesha@example.com");
        assert_eq!(record.message, "");
    }

    #[test]
    fn quote_message_is_optional_when_absent() {
        let mut raw = full_quote();
        raw.remove("message");
        assert!(validate_quote(&raw).is_ok());
    }

    #[test]
    fn every_quote_field_is_required() {
        for name in QUOTE_REQUIRED {
            let mut raw = full_quote();
            raw.remove(*name);
            assert_eq!(
                validate_quote(&raw).unwrap_err(),
                MissingFields(vec![*name]),
                "removing {name}"
            );
        }
    }

    #[test]
    fn every_contact_field_is_required() {
        for name in CONTACT_REQUIRED {
            let mut raw = form(&[
                ("name", "Sam"),
                ("email", "sam@x.co"),
                ("message", "Hello"),
            ]);
            raw.remove(*name);
            assert_eq!(
                validate_contact(&raw).unwrap_err(),
                MissingFields(vec![*name]),
                "removing {name}"
            );
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut raw = full_quote();
        raw.insert("company".into(), "   \t".into());
        raw.insert("phone".into(), "".into());
        assert_eq!(
            validate_quote(&raw).unwrap_err(),
            MissingFields(vec!["phone", "company"])
        );
    }

    #[test]
    fn empty_form_reports_all_required_fields() {
        let err = validate_quote(&HashMap::new()).unwrap_err();
        assert_eq!(err.0, QUOTE_REQUIRED);
        assert_eq!(
            err.to_string(),
            "Missing required fields: first_name, last_name, email, phone, company, service"
        );
    }

    #[test]
    fn trimming_is_idempotent() {
        let once = validate_quote(&full_quote()).unwrap();
        let again = validate_quote(&form(&[
            ("first_name", once.first_name.as_str()),
            ("last_name", once.last_name.as_str()),
            ("email", once.email.as_str()),
            ("phone", once.phone.as_str()),
            ("company", once.company.as_str()),
            ("service", once.service.as_str()),
            ("message", once.message.as_str()),
        ]))
        .unwrap();
        assert_eq!(once, again);
    }

    #[test]
    fn contact_optional_fields_default_to_empty() {
        let record = validate_contact(&form(&[
            ("name", "Bilal"),
            ("email", "bilal@example.com"),
            ("message", " Call me back "),
        ]))
        .unwrap();
        assert_eq!(record.phone, "");
        assert_eq!(record.subject, "");
        assert_eq!(record.message, "Call me back");
    }

    #[test]
    fn contact_requires_message() {
        let err = validate_contact(&form(&[
            ("name", "Bilal"),
            ("email", "bilal@example.com"),
            ("subject", "Pricing"),
        ]))
        .unwrap_err();
        assert_eq!(err, MissingFields(vec!["message"]));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut raw = full_quote();
        raw.insert("newsletter".into(), "yes".into());
        assert!(validate_quote(&raw).is_ok());
    }
}
