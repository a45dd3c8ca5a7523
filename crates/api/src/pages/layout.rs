//! Shared page chrome: document head, header navigation and footer.

use maud::{html, Markup, DOCTYPE};

use super::catalog::{Offering, INDUSTRIES, SERVICES};

pub const COMPANY: &str = "Zealous Solutions";
pub const PHONE: &str = "+923070088630";
pub const EMAIL: &str = "info@zealous-solutions.com";

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/industries", "Industries"),
    ("/contact", "Contact"),
];

/// Wrap `content` in the site document. `current` is the logical path of
/// the page, used to highlight its navigation entry.
pub fn page(title: &str, description: &str, current: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) " | " (COMPANY) }
                link rel="icon" type="image/svg+xml" href="/static/images/logo.svg";
                link rel="stylesheet" href="/static/css/style.css";
            }
            body {
                (header(current))
                main { (content) }
                (footer())
                script src="/static/js/script.js" {}
            }
        }
    }
}

fn header(current: &str) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" {
                img src="/static/images/logo.svg" alt=(COMPANY) width="40" height="40";
                span { (COMPANY) }
            }
            input.nav-toggle type="checkbox" id="nav-toggle";
            label.nav-hamburger for="nav-toggle" aria-label="Menu" { span {} span {} span {} }
            nav.site-nav {
                ul {
                    @for (path, label) in NAV {
                        @let is_current = *path == current
                            || (*path != "/" && current.starts_with(&format!("{path}/")));
                        li {
                            a class=[is_current.then_some("active")] href=(path) { (label) }
                        }
                    }
                    li { a.btn.btn-primary href="/request-quote" { "Get a Quote" } }
                }
            }
        }
    }
}

fn offering_links(offerings: &[Offering]) -> Markup {
    html! {
        ul {
            @for o in offerings {
                li { a href=(o.path) { (o.title) } }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer.site-footer {
            div.footer-grid {
                section {
                    h3 { (COMPANY) }
                    p { "Professional call centre and business process outsourcing services." }
                    p { "Phone: " a href={ "tel:" (PHONE) } { (PHONE) } }
                    p { "Email: " a href={ "mailto:" (EMAIL) } { (EMAIL) } }
                }
                section {
                    h3 { a href="/services" { "Services" } }
                    (offering_links(SERVICES))
                }
                section {
                    h3 { a href="/industries" { "Industries" } }
                    (offering_links(INDUSTRIES))
                }
                section {
                    h3 { "Company" }
                    ul {
                        li { a href="/about" { "About Us" } }
                        li { a href="/contact" { "Contact" } }
                        li { a href="/request-quote" { "Request a Quote" } }
                        li { a href="/privacy-policy" { "Privacy Policy" } }
                        li { a href="/terms-conditions" { "Terms & Conditions" } }
                        li { a href="/sitemap" { "Sitemap" } }
                    }
                }
            }
            p.copyright { "© " (COMPANY) ". All rights reserved." }
        }
    }
}

/// Hero banner used at the top of most pages.
pub fn hero(heading: &str, lead: &str) -> Markup {
    html! {
        section.hero {
            h1 { (heading) }
            p.lead { (lead) }
            a.btn.btn-primary href="/request-quote" { "Request a Free Quote" }
        }
    }
}

/// Grid of cards linking to each offering.
pub fn offering_cards(offerings: &[Offering]) -> Markup {
    html! {
        div.card-grid {
            @for o in offerings {
                article.card {
                    h3 { a href=(o.path) { (o.title) } }
                    p { (o.summary) }
                }
            }
        }
    }
}
