//! Link rewriting for static export.
//!
//! Pages rendered by the live server reference assets and other pages with
//! root-anchored paths (`/static/...`, `/about`). A static host may serve the
//! export from any directory, so every such reference is turned into a path
//! relative to the page's own location.
//!
//! Rules run in a fixed order, each on the previous rule's output:
//!
//! 1. `href="/static/` and `src="/static/` lose their leading slash.
//! 2. For pages `depth` directories deep, those asset references gain
//!    `depth` copies of `../`.
//! 3. `href="<logical path>"` for every route becomes `href="<export file>"`.
//! 4. For nested pages the rewritten navigation reference is prefixed with
//!    `depth` copies of `../` as well.
//!
//! Patterns are literal and end at the closing quote, so `href="/about"`
//! never matches `href="/about-us"` and paths missing from the route table
//! are left alone. Text produced by one rule never starts with `/`, so later
//! rules cannot match it again.

use crate::routes::RouteTable;

const ASSET_ATTRS: &[&str] = &["href", "src"];
const STATIC_ROOT: &str = "/static/";
const PARENT: &str = "../";

/// Number of directory levels below the export root, counted from the
/// separators in `export_file`.
///
/// ```
/// use zealous_core::rewrite::export_depth;
///
/// assert_eq!(export_depth("index.html"), 0);
/// assert_eq!(export_depth("services/inbound.html"), 1);
/// ```
pub fn export_depth(export_file: &str) -> usize {
    export_file.matches('/').count()
}

fn parent_prefix(depth: usize) -> String {
    PARENT.repeat(depth)
}

/// Rewrites rendered pages for a given route table.
#[derive(Debug, Clone)]
pub struct PathRewriter {
    /// `(logical_path, export_file)` pairs, one per route.
    links: Vec<(&'static str, &'static str)>,
}

impl PathRewriter {
    pub fn new(routes: &RouteTable) -> Self {
        let links = routes
            .entries()
            .iter()
            .map(|e| (e.logical_path, e.export_file))
            .collect();
        Self { links }
    }

    /// Rewrite `html` for a page exported `depth` directories deep.
    pub fn rewrite(&self, html: &str, depth: usize) -> String {
        let prefix = parent_prefix(depth);
        let html = rewrite_assets(html, &prefix);
        self.rewrite_navigation(&html, &prefix)
    }

    fn rewrite_navigation(&self, html: &str, prefix: &str) -> String {
        let mut out = html.to_string();
        for (logical_path, export_file) in &self.links {
            let from = format!("href=\"{logical_path}\"");
            if out.contains(&from) {
                out = out.replace(&from, &format!("href=\"{prefix}{export_file}\""));
            }
        }
        out
    }
}

/// Rules 1 and 2: make `/static/` references relative to the page.
fn rewrite_assets(html: &str, prefix: &str) -> String {
    let mut out = html.to_string();
    for attr in ASSET_ATTRS {
        out = out.replace(
            &format!("{attr}=\"{STATIC_ROOT}"),
            &format!("{attr}=\"static/"),
        );
    }
    if prefix.is_empty() {
        return out;
    }
    for attr in ASSET_ATTRS {
        out = out.replace(
            &format!("{attr}=\"static/"),
            &format!("{attr}=\"{prefix}static/"),
        );
    }
    out
}
