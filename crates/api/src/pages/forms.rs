//! Pages carrying the contact and quote forms.
//!
//! Field names must match what the submission handlers validate.

use maud::{html, Markup};

use super::catalog::SERVICES;
use super::layout::{page, EMAIL, PHONE};

fn field(label: &str, name: &str, kind: &str, required: bool) -> Markup {
    html! {
        label.field {
            span { (label) @if required { " *" } }
            input type=(kind) name=(name) required[required];
        }
    }
}

fn form_status() -> Markup {
    html! { div.form-status role="status" aria-live="polite" {} }
}

pub fn contact() -> Markup {
    let content = html! {
        section.section.form-page {
            h1 { "Contact Us" }
            p { "Call " a href={ "tel:" (PHONE) } { (PHONE) } ", e-mail "
                a href={ "mailto:" (EMAIL) } { (EMAIL) } " or use the form below." }
            form id="contact-form" class="ajax-form" method="post" action="/submit-contact" {
                (field("Name", "name", "text", true))
                (field("Email", "email", "email", true))
                (field("Phone", "phone", "tel", false))
                (field("Subject", "subject", "text", false))
                label.field {
                    span { "Message *" }
                    textarea name="message" rows="6" required {}
                }
                button.btn.btn-primary type="submit" { "Send Message" }
                (form_status())
            }
        }
    };
    page("Contact Us", "Get in touch with our team.", "/contact", content)
}

pub fn request_quote() -> Markup {
    let content = html! {
        section.section.form-page {
            h1 { "Request a Quote" }
            p { "Tell us about your project and we will get back to you within 24 hours." }
            form id="quote-form" class="ajax-form" method="post" action="/submit-quote" {
                div.field-row {
                    (field("First Name", "first_name", "text", true))
                    (field("Last Name", "last_name", "text", true))
                }
                (field("Email", "email", "email", true))
                (field("Phone", "phone", "tel", true))
                (field("Company", "company", "text", true))
                label.field {
                    span { "Service *" }
                    select name="service" required {
                        option value="" { "Select a service" }
                        @for o in SERVICES {
                            option value=(o.title) { (o.title) }
                        }
                    }
                }
                label.field {
                    span { "Message" }
                    textarea name="message" rows="5" {}
                }
                button.btn.btn-primary type="submit" { "Submit Request" }
                (form_status())
            }
        }
    };
    page(
        "Request a Quote",
        "Request a free call centre quote.",
        "/request-quote",
        content,
    )
}
