//! Page rendering.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every page links assets and other pages with root-anchored paths
//! (`/static/...`, `/about`); the static exporter rewrites those for its
//! output tree.

pub mod catalog;
pub mod errors;
mod forms;
mod layout;
mod site;

use maud::Markup;

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Unknown template '{0}'")]
    Unknown(String),
}

/// Render the page identified by `template_id`.
pub fn render(template_id: &str) -> Result<Markup, TemplateError> {
    let page = match template_id {
        "index" => site::home(),
        "about" => site::about(),
        "services" => site::services(),
        "industries" => site::industries(),
        "contact" => forms::contact(),
        "request_quote" => forms::request_quote(),
        "privacy_policy" => site::privacy_policy(),
        "terms_conditions" => site::terms_conditions(),
        "sitemap" => site::sitemap(),
        "404" => errors::not_found(),
        "500" => errors::server_error(),
        other => match catalog::find(other) {
            Some(offering) => site::offering(offering),
            None => return Err(TemplateError::Unknown(other.to_string())),
        },
    };
    Ok(page)
}
