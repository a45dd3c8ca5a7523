//! Error pages.

use maud::{html, Markup};

use super::layout::page;

pub fn not_found() -> Markup {
    let content = html! {
        section.section.error-page {
            h1 { "404" }
            p { "The page you are looking for does not exist." }
            a.btn.btn-primary href="/" { "Back to Home" }
        }
    };
    page("Page Not Found", "Page not found.", "", content)
}

pub fn server_error() -> Markup {
    let content = html! {
        section.section.error-page {
            h1 { "500" }
            p { "Something went wrong on our side. Please try again in a moment." }
            a.btn.btn-primary href="/" { "Back to Home" }
        }
    };
    page("Server Error", "Server error.", "", content)
}
