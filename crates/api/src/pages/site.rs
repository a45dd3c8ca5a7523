//! Informational pages.

use maud::{html, Markup};

use super::catalog::{Offering, INDUSTRIES, SERVICES};
use super::layout::{hero, offering_cards, page, COMPANY, EMAIL, PHONE};

pub fn home() -> Markup {
    let content = html! {
        (hero(
            "Professional Call Centre Solutions",
            "Inbound support, outbound campaigns and back-office services that scale with your business.",
        ))
        section.section {
            h2 { "Our Services" }
            (offering_cards(SERVICES))
            p.center { a.btn href="/services" { "View all services" } }
        }
        section.section.alt {
            h2 { "Industries We Serve" }
            (offering_cards(INDUSTRIES))
        }
        section.section {
            h2 { "Why " (COMPANY) "?" }
            ul.features {
                li { strong { "Trained agents. " } "Every agent completes product and compliance training before taking live calls." }
                li { strong { "Transparent reporting. " } "Daily call metrics and recordings available on request." }
                li { strong { "Flexible contracts. " } "Scale seats up or down month to month." }
            }
        }
    };
    page(
        "Home",
        "Professional inbound and outbound call centre services.",
        "/",
        content,
    )
}

pub fn about() -> Markup {
    let content = html! {
        (hero(
            "About Us",
            "A team of customer experience specialists helping businesses talk to their customers.",
        ))
        section.section {
            h2 { "Who We Are" }
            p {
                (COMPANY) " provides call centre, data and digital services to clients in "
                "insurance, healthcare, finance, real estate and technology. We combine "
                "experienced agents with modern tooling so every conversation is tracked, "
                "measured and improved."
            }
            h2 { "Our Mission" }
            p { "To deliver dependable customer conversations at a cost that lets our clients grow." }
        }
    };
    page("About Us", "About our call centre team.", "/about", content)
}

pub fn services() -> Markup {
    let content = html! {
        (hero(
            "Our Services",
            "From the first ring to the final follow-up, we cover the whole customer journey.",
        ))
        section.section { (offering_cards(SERVICES)) }
    };
    page("Services", "Call centre and digital services.", "/services", content)
}

pub fn industries() -> Markup {
    let content = html! {
        (hero(
            "Industries We Serve",
            "Agents trained on the terminology, regulations and customers of your sector.",
        ))
        section.section { (offering_cards(INDUSTRIES)) }
    };
    page(
        "Industries",
        "Industries served by our call centre.",
        "/industries",
        content,
    )
}

/// Detail page for a single service or industry.
pub fn offering(offering: &Offering) -> Markup {
    let content = html! {
        (hero(offering.title, offering.summary))
        section.section {
            h2 { "What's Included" }
            ul.features {
                @for item in offering.highlights {
                    li { (item) }
                }
            }
            p {
                "Talk to us about " (offering.title.to_lowercase()) ": call "
                a href={ "tel:" (PHONE) } { (PHONE) }
                " or "
                a href="/contact" { "send us a message" } "."
            }
        }
    };
    page(offering.title, offering.summary, offering.path, content)
}

pub fn privacy_policy() -> Markup {
    let content = html! {
        section.section.legal {
            h1 { "Privacy Policy" }
            p { "This policy explains how " (COMPANY) " handles the information you send us through this website." }
            h2 { "Information We Collect" }
            p { "When you submit the contact or quote form we receive the details you enter: name, e-mail address, phone number, company and your message." }
            h2 { "How We Use It" }
            p { "We use these details only to reply to your enquiry and to prepare a quote. Submissions are forwarded by e-mail to our team and are not stored in a database." }
            h2 { "Contact" }
            p { "Questions about this policy can be sent to " a href={ "mailto:" (EMAIL) } { (EMAIL) } "." }
        }
    };
    page(
        "Privacy Policy",
        "How we handle your information.",
        "/privacy-policy",
        content,
    )
}

pub fn terms_conditions() -> Markup {
    let content = html! {
        section.section.legal {
            h1 { "Terms & Conditions" }
            p { "By using this website you agree to the following terms." }
            h2 { "Use of the Site" }
            p { "Content on this site is provided for general information about our services and may change without notice." }
            h2 { "Quotes" }
            p { "Quotes provided in response to a request are estimates and become binding only when confirmed in a signed agreement." }
            h2 { "Liability" }
            p { (COMPANY) " is not liable for any loss arising from the use of information on this website." }
        }
    };
    page(
        "Terms & Conditions",
        "Terms of use for this website.",
        "/terms-conditions",
        content,
    )
}

pub fn sitemap() -> Markup {
    let content = html! {
        section.section {
            h1 { "Sitemap" }
            ul.sitemap {
                li { a href="/" { "Home" } }
                li { a href="/about" { "About Us" } }
                li {
                    a href="/services" { "Services" }
                    ul {
                        @for o in SERVICES { li { a href=(o.path) { (o.title) } } }
                    }
                }
                li {
                    a href="/industries" { "Industries" }
                    ul {
                        @for o in INDUSTRIES { li { a href=(o.path) { (o.title) } } }
                    }
                }
                li { a href="/contact" { "Contact" } }
                li { a href="/request-quote" { "Request a Quote" } }
                li { a href="/privacy-policy" { "Privacy Policy" } }
                li { a href="/terms-conditions" { "Terms & Conditions" } }
            }
        }
    };
    page("Sitemap", "All pages on this site.", "/sitemap", content)
}
