//! Site route table.
//!
//! Maps every public page's logical path to the template that renders it and
//! to the file it is written to by the static exporter. The same table drives
//! the live router, the exporter and the export link rewriter, so page naming
//! lives in exactly one place.

use std::collections::HashSet;

use crate::error::CoreError;

/// A single page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path served by the live site, e.g. `/services/inbound`.
    pub logical_path: &'static str,
    /// Identifier handed to the page renderer.
    pub template_id: &'static str,
    /// Output file relative to the export root, e.g. `services/inbound.html`.
    pub export_file: &'static str,
}

impl RouteEntry {
    pub const fn new(
        logical_path: &'static str,
        template_id: &'static str,
        export_file: &'static str,
    ) -> Self {
        Self {
            logical_path,
            template_id,
            export_file,
        }
    }

    /// Directory depth of the exported file below the export root.
    pub fn depth(&self) -> usize {
        crate::rewrite::export_depth(self.export_file)
    }
}

/// Logical path of the home page.
pub const HOME_PATH: &str = "/";

/// Every page of the live site, home first.
///
/// Export names mirror the logical path (hyphens kept) so a page is found at
/// the same place in both deployments.
pub const SITE_ROUTES: &[RouteEntry] = &[
    RouteEntry::new("/", "index", "index.html"),
    RouteEntry::new("/about", "about", "about.html"),
    RouteEntry::new("/contact", "contact", "contact.html"),
    RouteEntry::new("/request-quote", "request_quote", "request-quote.html"),
    RouteEntry::new("/services", "services", "services.html"),
    RouteEntry::new("/services/inbound", "services/inbound", "services/inbound.html"),
    RouteEntry::new("/services/outbound", "services/outbound", "services/outbound.html"),
    RouteEntry::new(
        "/services/data-scrubbing",
        "services/data_scrubbing",
        "services/data-scrubbing.html",
    ),
    RouteEntry::new(
        "/services/software-development",
        "services/software_development",
        "services/software-development.html",
    ),
    RouteEntry::new(
        "/services/digital-marketing",
        "services/digital_marketing",
        "services/digital-marketing.html",
    ),
    RouteEntry::new(
        "/services/website-development",
        "services/website_development",
        "services/website-development.html",
    ),
    RouteEntry::new("/industries", "industries", "industries.html"),
    RouteEntry::new(
        "/industries/insurance",
        "industries/insurance",
        "industries/insurance.html",
    ),
    RouteEntry::new(
        "/industries/healthcare",
        "industries/healthcare",
        "industries/healthcare.html",
    ),
    RouteEntry::new(
        "/industries/financial",
        "industries/financial",
        "industries/financial.html",
    ),
    RouteEntry::new(
        "/industries/real-estate",
        "industries/real_estate",
        "industries/real-estate.html",
    ),
    RouteEntry::new(
        "/industries/information-technology",
        "industries/it",
        "industries/information-technology.html",
    ),
    RouteEntry::new("/privacy-policy", "privacy_policy", "privacy-policy.html"),
    RouteEntry::new("/terms-conditions", "terms_conditions", "terms-conditions.html"),
    RouteEntry::new("/sitemap", "sitemap", "sitemap.html"),
];

/// Ordered, immutable collection of [`RouteEntry`] values.
///
/// Construction checks that logical paths and export files are unique, so
/// no two pages can overwrite each other at export time.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, rejecting duplicates and malformed entries.
    pub fn new(entries: impl IntoIterator<Item = RouteEntry>) -> Result<Self, CoreError> {
        let entries: Vec<RouteEntry> = entries.into_iter().collect();
        let mut paths = HashSet::new();
        let mut files = HashSet::new();

        for entry in &entries {
            if !entry.logical_path.starts_with('/') {
                return Err(CoreError::InvalidRoute {
                    path: entry.logical_path.to_string(),
                    reason: "logical path must start with '/'",
                });
            }
            if entry.export_file.starts_with('/') || !entry.export_file.ends_with(".html") {
                return Err(CoreError::InvalidRoute {
                    path: entry.logical_path.to_string(),
                    reason: "export file must be a relative .html path",
                });
            }
            if entry
                .export_file
                .split('/')
                .any(|segment| segment.is_empty() || segment == "." || segment == "..")
            {
                return Err(CoreError::InvalidRoute {
                    path: entry.logical_path.to_string(),
                    reason: "export file must not contain empty, '.' or '..' segments",
                });
            }
            if !paths.insert(entry.logical_path) {
                return Err(CoreError::DuplicateRoute {
                    field: "logical_path",
                    value: entry.logical_path.to_string(),
                });
            }
            if !files.insert(entry.export_file) {
                return Err(CoreError::DuplicateRoute {
                    field: "export_file",
                    value: entry.export_file.to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// The table for the company site.
    pub fn site() -> Self {
        // SITE_ROUTES is covered by `site_table_is_valid`.
        Self {
            entries: SITE_ROUTES.to_vec(),
        }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn lookup(&self, logical_path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.logical_path == logical_path)
    }

    /// The entry served at [`HOME_PATH`], if the table has one.
    pub fn home(&self) -> Option<&RouteEntry> {
        self.lookup(HOME_PATH)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
