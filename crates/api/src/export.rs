//! Static site export.
//!
//! Renders every page of the [`RouteTable`] through the live router
//! in-process, rewrites root-anchored links for the page's depth, and writes
//! the result under an output directory together with a fresh copy of the
//! static assets. A page that fails to render is logged and skipped; the
//! rest of the export carries on.
//!
//! ```text
//! docs/
//! ├── index.html
//! ├── about.html
//! ├── services.html
//! ├── services/
//! │   ├── inbound.html
//! │   └── ...
//! ├── industries/
//! │   └── ...
//! └── static/          # copied wholesale from STATIC_DIR
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use walkdir::WalkDir;
use zealous_core::rewrite::PathRewriter;
use zealous_core::routes::{RouteEntry, RouteTable};

/// Upper bound on a rendered page body.
const MAX_PAGE_BYTES: usize = 8 * 1024 * 1024;

/// Why a single page was left out of the export.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("route answered with status {0}")]
    Status(StatusCode),

    #[error("could not build request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("could not read response body: {0}")]
    Body(#[from] axum::Error),

    #[error("response body is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Errors that abort the whole export run.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Static asset directory {0} does not exist")]
    MissingStatic(PathBuf),

    #[error("Failed to walk static assets: {0}")]
    Walk(#[from] walkdir::Error),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// A rendered and rewritten page, ready to be written.
#[derive(Debug, Clone)]
pub struct ExportedPage {
    /// Path relative to the output root.
    pub file_path: PathBuf,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPage {
    pub logical_path: String,
    pub reason: String,
}

/// Outcome of an export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Files written, relative to the output root.
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedPage>,
}

/// Render one route through `app` and rewrite it for its export depth.
pub async fn render_route(
    app: &Router,
    rewriter: &PathRewriter,
    entry: &RouteEntry,
) -> Result<ExportedPage, PageError> {
    let request = Request::builder()
        .uri(entry.logical_path)
        .body(Body::empty())?;

    let response = app
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});

    if response.status() != StatusCode::OK {
        return Err(PageError::Status(response.status()));
    }

    let bytes = to_bytes(response.into_body(), MAX_PAGE_BYTES).await?;
    let html = String::from_utf8(bytes.to_vec())?;

    Ok(ExportedPage {
        file_path: PathBuf::from(entry.export_file),
        html: rewriter.rewrite(&html, entry.depth()),
    })
}

/// Export every route of `routes` into `output_root`.
pub async fn export_site(
    app: Router,
    routes: &RouteTable,
    output_root: &Path,
    static_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    if !static_dir.is_dir() {
        return Err(ExportError::MissingStatic(static_dir.to_path_buf()));
    }
    fs::create_dir_all(output_root).map_err(io_error(output_root))?;

    let rewriter = PathRewriter::new(routes);
    let mut summary = ExportSummary::default();

    for entry in routes.entries() {
        let page = match render_route(&app, &rewriter, entry).await {
            Ok(page) => page,
            Err(err) => {
                tracing::error!(
                    route = entry.logical_path,
                    file = entry.export_file,
                    error = %err,
                    "Skipping page",
                );
                summary.skipped.push(SkippedPage {
                    logical_path: entry.logical_path.to_string(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let target = output_root.join(&page.file_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        fs::write(&target, &page.html).map_err(io_error(&target))?;
        tracing::info!(file = %page.file_path.display(), "Generated page");
        summary.written.push(page.file_path);
    }

    let static_out = output_root.join("static");
    replace_dir(static_dir, &static_out)?;
    tracing::info!(from = %static_dir.display(), to = %static_out.display(), "Copied static assets");

    Ok(summary)
}

/// Replace `dst` with a copy of `src`. Any existing `dst` is removed first so
/// deleted assets do not linger in the export.
fn replace_dir(src: &Path, dst: &Path) -> Result<(), ExportError> {
    if dst.exists() {
        fs::remove_dir_all(dst).map_err(io_error(dst))?;
    }

    for entry in WalkDir::new(src) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(io_error(&target))?;
        }
    }
    Ok(())
}
