//! Integration tests for the static exporter.

mod common;

use std::fs;
use std::sync::Arc;

use assert_matches::assert_matches;
use common::RecordingMailer;
use zealous_api::export::{export_site, ExportError};
use zealous_core::routes::{RouteEntry, RouteTable, SITE_ROUTES};
use zealous_events::DisabledMailer;

#[tokio::test]
async fn exports_every_route_with_relative_links() {
    let out = tempfile::tempdir().unwrap();
    let routes = RouteTable::site();
    let app = common::build_test_app(Arc::new(DisabledMailer));

    let summary = export_site(app, &routes, out.path(), &common::static_dir())
        .await
        .unwrap();

    assert!(summary.skipped.is_empty());
    assert_eq!(summary.written.len(), routes.len());

    for entry in routes.entries() {
        let html = fs::read_to_string(out.path().join(entry.export_file)).unwrap();
        let prefix = "../".repeat(entry.depth());

        assert!(
            html.contains(&format!(r#"href="{prefix}index.html""#)),
            "{} has no home link for depth {}",
            entry.export_file,
            entry.depth()
        );
        assert!(html.contains(&format!(r#"href="{prefix}static/css/style.css""#)));
        assert!(html.contains(&format!(r#"src="{prefix}static/js/script.js""#)));
        assert!(!html.contains(r#"href="/"#), "{} keeps a root link", entry.export_file);
        assert!(!html.contains(r#"src="/"#), "{} keeps a root asset", entry.export_file);
    }
}

#[tokio::test]
async fn nested_page_links_into_other_groups() {
    let out = tempfile::tempdir().unwrap();
    let routes = RouteTable::site();
    let app = common::build_test_app(Arc::new(DisabledMailer));

    export_site(app, &routes, out.path(), &common::static_dir())
        .await
        .unwrap();

    let html = fs::read_to_string(out.path().join("services/inbound.html")).unwrap();
    assert!(html.contains(r#"href="../industries/real-estate.html""#));
    assert!(html.contains(r#"href="../services/data-scrubbing.html""#));
    assert!(html.contains(r#"href="../privacy-policy.html""#));

    let top = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(top.contains(r#"href="services/inbound.html""#));
    assert!(!top.contains("../"));
}

#[tokio::test]
async fn static_tree_is_replaced() {
    let out = tempfile::tempdir().unwrap();
    fs::create_dir_all(out.path().join("static/old")).unwrap();
    fs::write(out.path().join("static/old/stale.css"), "old").unwrap();

    let routes = RouteTable::site();
    let app = common::build_test_app(Arc::new(DisabledMailer));
    export_site(app, &routes, out.path(), &common::static_dir())
        .await
        .unwrap();

    assert!(out.path().join("static/css/style.css").is_file());
    assert!(out.path().join("static/js/script.js").is_file());
    assert!(!out.path().join("static/old").exists());
}

#[tokio::test]
async fn failing_route_is_skipped_and_export_continues() {
    let out = tempfile::tempdir().unwrap();
    let mut entries: Vec<RouteEntry> = SITE_ROUTES.to_vec();
    entries.insert(1, RouteEntry::new("/careers", "careers", "careers.html"));
    let routes = RouteTable::new(entries).unwrap();

    // The app only serves the built-in table, so /careers answers 404.
    let app = common::build_test_app(RecordingMailer::new());
    let summary = export_site(app, &routes, out.path(), &common::static_dir())
        .await
        .unwrap();

    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].logical_path, "/careers");
    assert!(summary.skipped[0].reason.contains("404"));
    assert_eq!(summary.written.len(), SITE_ROUTES.len());
    assert!(!out.path().join("careers.html").exists());
    assert!(out.path().join("sitemap.html").is_file());
}

#[tokio::test]
async fn missing_static_dir_is_an_error() {
    let out = tempfile::tempdir().unwrap();
    let routes = RouteTable::site();
    let app = common::build_test_app(Arc::new(DisabledMailer));

    let result = export_site(app, &routes, out.path(), &out.path().join("nope")).await;

    assert_matches!(result, Err(ExportError::MissingStatic(_)));
}
